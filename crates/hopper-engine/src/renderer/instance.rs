use bytemuck::{Pod, Zeroable};

/// One sprite draw handed to the host renderer.
/// Must match the host protocol: 10 x 4-byte fields = 40 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    /// Destination rectangle in world units (top-left origin).
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Source rectangle in sheet pixels. Ignored unless `HAS_SOURCE` is set.
    pub src_x: f32,
    pub src_y: f32,
    pub src_w: f32,
    pub src_h: f32,
    /// Sheet handle. Ignored unless `HAS_SHEET` is set.
    pub sheet: u32,
    pub flags: u32,
}

impl DrawInstance {
    pub const FIELDS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FIELDS * 4;

    /// Source rectangle is valid; otherwise stretch the whole sheet.
    pub const HAS_SOURCE: u32 = 1 << 0;
    /// A sheet was assigned; otherwise the renderer uses its fallback texture.
    pub const HAS_SHEET: u32 = 1 << 1;

    pub fn has_source(&self) -> bool {
        self.flags & Self::HAS_SOURCE != 0
    }

    pub fn has_sheet(&self) -> bool {
        self.flags & Self::HAS_SHEET != 0
    }
}

/// Draw list rebuilt after every rendered frame.
pub struct DrawBuffer {
    pub instances: Vec<DrawInstance>,
}

impl DrawBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: DrawInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw bytes of the instance array.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const u8 {
        self.instances.as_ptr() as *const u8
    }
}

impl Default for DrawBuffer {
    fn default() -> Self {
        Self::new()
    }
}
