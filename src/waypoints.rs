// src/waypoints.rs

//! Hand-authored stroke programs for every character the arm can draw.
//!
//! Each program is an ordered list of [`Waypoint`]s, offsets from the end of
//! link 1 in glyph units (roughly 1 wide, 2 tall). The first waypoint moves
//! the pen into position without drawing; the rest are strokes.
//!
//! The programs are approximations, not derived from font outlines.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::kinematics::Vec2;

/// One target the end effector visits while drawing a character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub dx: f64,
    pub dy: f64,
    /// Whether the pen touches the surface on the way to this point.
    pub pen_down: bool,
    /// Step name, used as the key in the named-steps document layout.
    pub label: &'static str,
}

impl Waypoint {
    /// A repositioning move with the pen lifted.
    pub const fn travel(dx: f64, dy: f64, label: &'static str) -> Self {
        Waypoint {
            dx,
            dy,
            pen_down: false,
            label,
        }
    }

    /// A drawing move with the pen on the surface.
    pub const fn stroke(dx: f64, dy: f64, label: &'static str) -> Self {
        Waypoint {
            dx,
            dy,
            pen_down: true,
            label,
        }
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }
}

/// Every character on a US keyboard that has a program, lower-case letters
/// included (they resolve to the upper-case programs).
pub const DEFAULT_INPUT: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+{}[]:;<>,.?/";

use Waypoint as W;

const START: &str = "move_to_start";

#[rustfmt::skip]
static PROGRAMS: &[(char, &[Waypoint])] = &[
    // Letters
    ('A', &[W::travel(0.0, 0.0, START), W::stroke(1.0, 2.0, "move_up_right"), W::stroke(2.0, 0.0, "move_down_right"), W::stroke(0.5, 1.0, "move_across")]),
    ('B', &[W::travel(0.0, 0.0, START), W::stroke(0.0, 2.0, "move_up"), W::stroke(1.0, 1.0, "curve")]),
    ('C', &[W::travel(2.0, 2.0, START), W::stroke(0.0, -2.0, "move_curve_down_left")]),
    ('D', &[W::travel(0.0, 0.0, START), W::stroke(0.0, -2.0, "move_down"), W::stroke(1.0, 0.0, "curve_right")]),
    ('E', &[W::travel(0.0, 0.0, START), W::stroke(1.0, 0.0, "move_across_top"), W::stroke(0.0, -1.0, "move_down_middle"), W::stroke(1.0, -2.0, "move_across_bottom")]),
    ('F', &[W::travel(0.0, 0.0, START), W::stroke(1.0, 0.0, "move_across_top"), W::stroke(0.0, -1.0, "move_down_middle")]),
    ('G', &[W::travel(2.0, 2.0, START), W::stroke(0.0, -2.0, "move_curve_down_left"), W::stroke(1.0, -1.0, "move_right")]),
    ('H', &[W::travel(0.0, 0.0, START), W::stroke(0.0, -2.0, "move_down"), W::stroke(0.5, -1.0, "move_across_middle")]),
    ('I', &[W::travel(0.5, 0.0, START), W::stroke(0.5, -2.0, "move_down")]),
    ('J', &[W::travel(0.5, 0.0, START), W::stroke(0.5, -1.0, "move_down"), W::stroke(-0.5, -2.0, "move_curve_left")]),
    ('K', &[W::travel(0.0, 0.0, START), W::stroke(1.0, -1.0, "move_diagonal_down_left"), W::stroke(1.0, 1.0, "move_diagonal_up_left")]),
    ('L', &[W::travel(0.0, 0.0, START), W::stroke(0.0, -2.0, "move_down"), W::stroke(1.0, -2.0, "move_right")]),
    ('M', &[W::travel(0.0, 0.0, START), W::stroke(1.0, 2.0, "move_diagonal_up_right"), W::stroke(2.0, 0.0, "move_diagonal_down_right")]),
    ('N', &[W::travel(0.0, 0.0, START), W::stroke(1.0, 2.0, "move_diagonal_up_right"), W::stroke(1.0, 0.0, "move_down")]),
    ('O', &[W::travel(0.0, 0.0, START), W::stroke(1.0, 1.0, "move_curve_right"), W::stroke(-1.0, -1.0, "move_curve_left")]),
    ('P', &[W::travel(0.0, 0.0, START), W::stroke(0.0, 2.0, "move_up"), W::stroke(1.0, 1.0, "move_curve_right")]),
    ('Q', &[W::travel(0.0, 0.0, START), W::stroke(1.0, 1.0, "move_curve_right"), W::stroke(1.5, -1.5, "move_diagonal_down")]),
    ('R', &[W::travel(0.0, 0.0, START), W::stroke(0.0, 2.0, "move_up"), W::stroke(1.0, 1.0, "move_curve_right"), W::stroke(1.0, 0.0, "move_diagonal_down_right")]),
    ('S', &[W::travel(1.0, 0.0, START), W::stroke(0.0, -1.0, "move_curve_down_left"), W::stroke(-1.0, 1.0, "move_curve_up_left")]),
    ('T', &[W::travel(0.5, 2.0, START), W::stroke(0.5, 0.0, "move_down"), W::stroke(0.0, 2.0, "move_across_top")]),
    ('U', &[W::travel(0.5, 2.0, START), W::stroke(0.5, 0.0, "move_down"), W::stroke(1.0, 1.0, "move_curve_right")]),
    ('V', &[W::travel(0.0, 2.0, START), W::stroke(1.0, 0.0, "move_diagonal_down_right"), W::stroke(2.0, 2.0, "move_diagonal_up_right")]),
    ('W', &[W::travel(0.0, 2.0, START), W::stroke(1.0, 0.0, "move_diagonal_down_right"), W::stroke(2.0, 2.0, "move_diagonal_up_right")]),
    ('X', &[W::travel(0.0, 2.0, START), W::stroke(1.0, 0.0, "move_diagonal_down_right"), W::stroke(0.0, 2.0, "move_diagonal_up_left")]),
    ('Y', &[W::travel(1.0, 2.0, START), W::stroke(1.0, 0.0, "move_down")]),
    ('Z', &[W::travel(0.0, 2.0, START), W::stroke(1.0, 0.0, "move_diagonal_down_right"), W::stroke(0.0, 0.0, "move_across_bottom")]),
    // Digits
    ('0', &[W::travel(0.0, 0.0, START), W::stroke(1.0, -1.0, "curve_down_right"), W::stroke(-1.0, 1.0, "curve_up_left")]),
    ('1', &[W::travel(1.0, 0.0, START), W::stroke(0.0, 2.0, "move_up")]),
    ('2', &[W::travel(0.0, 0.0, START), W::stroke(1.0, 0.0, "move_right"), W::stroke(1.0, -1.0, "move_down_right")]),
    ('3', &[W::travel(0.0, 0.0, START), W::stroke(1.0, -1.0, "curve_down_right"), W::stroke(0.5, 0.0, "move_across")]),
    ('4', &[W::travel(1.0, 0.0, START), W::stroke(1.0, -2.0, "move_down"), W::stroke(0.5, -1.0, "move_across_middle")]),
    ('5', &[W::travel(1.0, 2.0, START), W::stroke(1.0, 0.0, "move_down"), W::stroke(1.0, -1.0, "curve_right")]),
    ('6', &[W::travel(1.0, 2.0, START), W::stroke(1.0, 0.0, "curve_down_right"), W::stroke(1.0, 2.0, "move_up")]),
    ('7', &[W::travel(1.0, 2.0, START), W::stroke(0.0, 0.0, "move_diagonal_down_left")]),
    ('8', &[W::travel(0.0, 0.0, START), W::stroke(1.0, 2.0, "curve_up_right"), W::stroke(0.0, -2.0, "curve_down_left")]),
    ('9', &[W::travel(1.0, 2.0, START), W::stroke(1.0, 0.0, "curve_down_right")]),
    // Punctuation
    ('!', &[W::travel(0.0, 0.0, START), W::stroke(0.0, -2.0, "move_down"), W::stroke(0.0, -2.2, "move_dot")]),
    ('@', &[W::travel(1.0, 0.0, START), W::stroke(1.0, 1.0, "curve_inward")]),
    ('#', &[W::travel(0.0, 1.0, START), W::stroke(0.0, -2.0, "move_down"), W::stroke(0.5, 0.5, "move_horizontal_1"), W::stroke(0.5, -0.5, "move_horizontal_2")]),
    ('$', &[W::travel(0.0, 1.0, START), W::stroke(0.0, -1.0, "curve_down")]),
    ('%', &[W::travel(0.0, 1.0, START), W::stroke(0.5, 1.0, "move_across")]),
    ('^', &[W::travel(1.0, 0.0, START), W::stroke(0.0, 2.0, "move_diagonal_up")]),
    ('&', &[W::travel(0.0, 2.0, START), W::stroke(1.0, -1.0, "curve_down_right")]),
    ('*', &[W::travel(0.0, 1.0, START), W::stroke(1.0, -1.0, "move_diagonal_cross")]),
    ('(', &[W::travel(1.0, 2.0, START), W::stroke(-1.0, -1.0, "curve_down_left")]),
    (')', &[W::travel(-1.0, 2.0, START), W::stroke(1.0, -1.0, "curve_down_right")]),
    ('_', &[W::travel(0.0, -1.0, START), W::stroke(1.0, -1.0, "move_across")]),
    ('-', &[W::travel(0.0, -1.0, START), W::stroke(1.0, -1.0, "move_across")]),
    ('=', &[W::travel(0.0, -0.5, START), W::stroke(1.0, -0.5, "move_across_top"), W::stroke(1.0, -1.5, "move_across_bottom")]),
    ('+', &[W::travel(0.5, 0.0, START), W::stroke(0.5, -1.0, "move_down"), W::stroke(0.0, -0.5, "move_across")]),
    ('{', &[W::travel(1.0, 2.0, START), W::stroke(0.0, -1.0, "curve_down_left")]),
    ('}', &[W::travel(-1.0, 2.0, START), W::stroke(1.0, -1.0, "curve_down_right")]),
    ('[', &[W::travel(1.0, 2.0, START), W::stroke(0.0, -2.0, "move_down"), W::stroke(0.0, -2.0, "move_across_bottom")]),
    (']', &[W::travel(1.0, 2.0, START), W::stroke(0.0, -2.0, "move_down"), W::stroke(1.0, -2.0, "move_across_bottom")]),
    (':', &[W::travel(0.5, 1.0, START), W::stroke(0.5, -1.0, "move_down")]),
    (';', &[W::travel(0.5, 1.0, START), W::stroke(0.5, -1.0, "move_down"), W::stroke(0.2, -1.2, "move_curve_dot")]),
    ('<', &[W::travel(1.0, 1.0, START), W::stroke(0.0, 0.0, "move_diagonal_down_left")]),
    ('>', &[W::travel(0.0, 1.0, START), W::stroke(1.0, 0.0, "move_diagonal_down_right")]),
    (',', &[W::travel(0.5, 0.0, START), W::stroke(0.5, -0.5, "move_down"), W::stroke(0.2, -1.0, "move_curve_dot")]),
    ('.', &[W::travel(0.5, 0.0, START), W::stroke(0.2, -1.0, "move_dot")]),
    ('?', &[W::travel(0.0, 2.0, START), W::stroke(1.0, 1.0, "move_curve_right"), W::stroke(0.2, -1.0, "move_dot")]),
    ('/', &[W::travel(1.0, 2.0, START), W::stroke(0.0, -1.0, "move_diagonal_down_left")]),
];

static TABLE: Lazy<HashMap<char, &'static [Waypoint]>> =
    Lazy::new(|| PROGRAMS.iter().copied().collect());

/// Upper-case form used for lookup, if it is a single character.
fn lookup_key(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

/// The stroke program for `c`, case-insensitively. Unsupported characters
/// get an empty program.
pub fn program_for(c: char) -> &'static [Waypoint] {
    lookup_key(c)
        .and_then(|key| TABLE.get(&key).copied())
        .unwrap_or(&[])
}

pub fn is_supported(c: char) -> bool {
    !program_for(c).is_empty()
}

/// Characters with a program, in table order (upper-case letters, digits,
/// punctuation).
pub fn supported_characters() -> impl Iterator<Item = char> {
    PROGRAMS.iter().map(|(c, _)| *c)
}
