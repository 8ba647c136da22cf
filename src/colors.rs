// Colors in ARGB8888 format
pub const COLOR_BACKGROUND: u32 = 0xFF1E1E1E;
pub const COLOR_GRID: u32 = 0xFF333333;
pub const COLOR_WINDOW: u32 = 0xFF00C853;
pub const COLOR_ORIGINAL_LINE: u32 = 0xFF3A4E7A;
pub const COLOR_CLIPPED_LINE: u32 = 0xFF4D8BFF;
pub const COLOR_ORIGINAL_POLYGON: u32 = 0xFF7A3A3A;
pub const COLOR_CLIPPED_POLYGON: u32 = 0xFFFF4040;

/// Split a packed ARGB color into `[r, g, b, a]` bytes.
#[inline]
pub fn unpack_rgba(color: u32) -> [u8; 4] {
    let a = (color >> 24) as u8;
    let r = (color >> 16) as u8;
    let g = (color >> 8) as u8;
    let b = color as u8;
    [r, g, b, a]
}
