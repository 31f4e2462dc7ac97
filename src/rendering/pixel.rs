/// One 32-bit pixel laid out as 0xAARRGGBB
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Fully transparent black, the default background
    pub const CLEAR: Pixel = Pixel(0x0000_0000);
    const ALPHA_MASK: u32 = 0xFF00_0000;

    /// Force the alpha channel to fully opaque
    pub const fn opaque(argb: u32) -> Self {
        Self(argb | Self::ALPHA_MASK)
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Byte order expected by RGBA8 textures
    pub const fn to_rgba8(self) -> [u8; 4] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8, self.alpha()]
    }
}
