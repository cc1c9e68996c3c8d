//! Drawing the ragdoll onto a caller-supplied 2D surface.
//!
//! The physics never touches textures. A [`Renderer`] borrows a
//! [`TextureSource`] and asks it for every part on every draw, so a texture
//! that finishes loading halfway through a crash shows up on the next frame.

use crate::error::RagdollError;
use crate::float::Float;
use crate::part::{Part, PartGroup, GROUP_COUNT};
use crate::skeleton::Ragdoll;

/// Opaque RGB color for the untextured fallback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Fallback colors used when a part has no ready texture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub head: Color,
    pub torso: Color,
    pub limb: Color,
}

impl Palette {
    pub fn color(&self, group: PartGroup) -> Color {
        match group {
            PartGroup::Head => self.head,
            PartGroup::Torso => self.torso,
            _ => self.limb,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            head: Color::rgb(0xf0, 0xc8, 0xa0),
            torso: Color::rgb(0x3a, 0x6e, 0xa5),
            limb: Color::rgb(0x2d, 0x4f, 0x73),
        }
    }
}

/// A 2D drawing surface with a transform stack, modelled on the HTML canvas.
pub trait Canvas {
    type Texture: ?Sized;

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    /// Rotate clockwise by `angle` radians (y points down).
    fn rotate(&mut self, angle: f64);
    fn draw_texture(&mut self, texture: &Self::Texture, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, color: Color, x: f64, y: f64, width: f64, height: f64);
}

/// An image that may still be loading.
pub trait Texture {
    fn is_ready(&self) -> bool;
}

/// Read-only lookup from part group to texture.
pub trait TextureSource {
    type Texture: Texture + ?Sized;

    fn texture(&self, group: PartGroup) -> Option<&Self::Texture>;
}

/// Texture that never becomes ready.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTexture;

impl Texture for NoTexture {
    fn is_ready(&self) -> bool {
        false
    }
}

/// Empty texture source; everything falls back to flat colors.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTextures;

impl TextureSource for NoTextures {
    type Texture = NoTexture;

    fn texture(&self, _group: PartGroup) -> Option<&NoTexture> {
        None
    }
}

/// Fixed six-slot texture table keyed by [`PartGroup`].
#[derive(Clone, Debug)]
pub struct TextureMap<T> {
    slots: [Option<T>; GROUP_COUNT],
}

impl<T> TextureMap<T> {
    pub fn new() -> Self {
        TextureMap { slots: core::array::from_fn(|_| None) }
    }

    /// Store a texture, returning the one it replaced.
    pub fn insert(&mut self, group: PartGroup, texture: T) -> Option<T> {
        self.slots[group.index()].replace(texture)
    }

    /// Store a texture under an asset key such as `"upper_arm"`.
    pub fn insert_named(&mut self, name: &str, texture: T) -> Result<Option<T>, RagdollError> {
        let group = PartGroup::from_name(name).ok_or(RagdollError::UnknownPart)?;
        Ok(self.insert(group, texture))
    }

    pub fn remove(&mut self, group: PartGroup) -> Option<T> {
        self.slots[group.index()].take()
    }

    pub fn get(&self, group: PartGroup) -> Option<&T> {
        self.slots[group.index()].as_ref()
    }

    pub fn get_mut(&mut self, group: PartGroup) -> Option<&mut T> {
        self.slots[group.index()].as_mut()
    }
}

impl<T> Default for TextureMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Texture> TextureSource for TextureMap<T> {
    type Texture = T;

    fn texture(&self, group: PartGroup) -> Option<&T> {
        self.get(group)
    }
}

/// Draws a ragdoll part by part with textures or flat colors.
pub struct Renderer<'t, S: ?Sized> {
    textures: Option<&'t S>,
    palette: Palette,
}

impl Renderer<'static, NoTextures> {
    /// Renderer that only ever draws flat colored rectangles.
    pub fn untextured() -> Self {
        Renderer { textures: None, palette: Palette::default() }
    }
}

impl<'t, S: TextureSource + ?Sized> Renderer<'t, S> {
    pub fn new(textures: Option<&'t S>) -> Self {
        Renderer { textures, palette: Palette::default() }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn ready_texture(&self, group: PartGroup) -> Option<&'t S::Texture> {
        self.textures?.texture(group).filter(|t| t.is_ready())
    }

    /// Draw every part in [`Part::ALL`] order; later parts paint over
    /// earlier ones.
    pub fn draw<F, C>(&self, ragdoll: &Ragdoll<F>, canvas: &mut C)
    where
        F: Float,
        C: Canvas<Texture = S::Texture> + ?Sized,
    {
        for part in Part::ALL {
            let p = ragdoll.particle(part);
            let w = p.width.to_f64();
            let h = p.height.to_f64();

            canvas.save();
            canvas.translate(p.pos.x.to_f64(), p.pos.y.to_f64());
            canvas.rotate(p.angle.to_f64());
            match self.ready_texture(part.group()) {
                Some(texture) => canvas.draw_texture(texture, -w * 0.5, -h * 0.5, w, h),
                None => {
                    let color = self.palette.color(part.group());
                    canvas.fill_rect(color, -w * 0.5, -h * 0.5, w, h);
                }
            }
            canvas.restore();
        }
    }
}
