//! Shade families for cell coloring.
//!
//! Every family is an ordered ramp from light to dark; a cell carries a
//! reference to one family plus an index into it, which is all the raycast
//! view needs to keep its wall shading consistent with the 2D coloring.

use crate::cell::GroupId;

pub const SHADE_STEPS: usize = 6;

/// One color family, light to dark, as `0xRRGGBB` values.
pub type ShadeSet = [u32; SHADE_STEPS];

pub const YELLOW: ShadeSet = [0xFFF9C4, 0xFFF59D, 0xFFEE58, 0xFDD835, 0xF9A825, 0xF57F17];
pub const DARK_GREEN: ShadeSet = [0xC8E6C9, 0x81C784, 0x4CAF50, 0x388E3C, 0x2E7D32, 0x1B5E20];
pub const BLUE: ShadeSet = [0xBBDEFB, 0x64B5F6, 0x2196F3, 0x1976D2, 0x1565C0, 0x0D47A1];
pub const PINK: ShadeSet = [0xF8BBD0, 0xF48FB1, 0xEC407A, 0xD81B60, 0xC2185B, 0x880E4F];
pub const ORANGE: ShadeSet = [0xFFE0B2, 0xFFB74D, 0xFF9800, 0xF57C00, 0xEF6C00, 0xE65100];
pub const LAVENDER: ShadeSet = [0xE1BEE7, 0xCE93D8, 0xAB47BC, 0x8E24AA, 0x6A1B9A, 0x4A148C];
pub const RED: ShadeSet = [0xFFCDD2, 0xE57373, 0xF44336, 0xD32F2F, 0xC62828, 0xB71C1C];
pub const PALE_BLUE: ShadeSet = [0xE0F7FA, 0xB2EBF2, 0x80DEEA, 0x4DD0E1, 0x26C6DA, 0x00ACC1];
pub const VIVID_PINK: ShadeSet = [0xFF80AB, 0xFF4081, 0xF50057, 0xC51162, 0xAD1457, 0x880E4F];

/// Fallback family for path cells that belong to no group yet.
pub const YELLOW_GREEN: ShadeSet = [0xF0F4C3, 0xDCE775, 0xC0CA33, 0xAFB42B, 0x9E9D24, 0x827717];

pub const DARK_GRAY: ShadeSet = [0x616161, 0x515151, 0x424242, 0x333333, 0x262626, 0x1A1A1A];

/// Cycling order for newly allocated groups.
pub const GROUP_PALETTE: [&ShadeSet; 9] = [
    &YELLOW,
    &DARK_GREEN,
    &BLUE,
    &PINK,
    &ORANGE,
    &LAVENDER,
    &RED,
    &PALE_BLUE,
    &VIVID_PINK,
];

pub const SKY: u32 = 0x222233;
pub const FLOOR: u32 = 0x222211;

/// Family assigned to the nth allocated group (counter starts at 1).
pub fn group_shades(counter: GroupId) -> &'static ShadeSet {
    GROUP_PALETTE[(counter as usize - 1) % GROUP_PALETTE.len()]
}
