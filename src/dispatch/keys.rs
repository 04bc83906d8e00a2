//! Byte values of the keys the dispatcher acts on.

pub const CTRL_A: u8 = 0x01;
pub const CTRL_B: u8 = 0x02;
pub const CTRL_C: u8 = 0x03;
pub const CTRL_D: u8 = 0x04;
pub const CTRL_E: u8 = 0x05;
pub const CTRL_F: u8 = 0x06;
pub const CTRL_H: u8 = 0x08;
pub const TAB: u8 = 0x09;
pub const LINE_FEED: u8 = 0x0A;
pub const CTRL_K: u8 = 0x0B;
pub const CTRL_L: u8 = 0x0C;
pub const ENTER: u8 = 0x0D;
pub const CTRL_N: u8 = 0x0E;
pub const CTRL_P: u8 = 0x10;
pub const CTRL_T: u8 = 0x14;
pub const CTRL_U: u8 = 0x15;
pub const CTRL_W: u8 = 0x17;
pub const ESC: u8 = 0x1B;
pub const BACKSPACE: u8 = 0x7F;
