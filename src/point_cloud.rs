use blade_graphics as gpu;

use std::{mem, ptr};

/// Host-visible buffer holding the flat particle positions read by the shader.
pub struct PointCloud {
    pub position_buf: gpu::Buffer,
    count: usize,
}

impl PointCloud {
    pub fn new(count: usize, context: &gpu::Context) -> Self {
        let position_buf = context.create_buffer(gpu::BufferDesc {
            name: "particle-positions",
            size: (count.max(1) * 3 * mem::size_of::<f32>()) as u64,
            memory: gpu::Memory::Shared,
        });
        Self {
            position_buf,
            count,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Copies `positions` into the buffer.
    ///
    /// The GPU must be done with the previous frame that read this buffer.
    pub fn upload(&mut self, positions: &[f32]) {
        assert_eq!(positions.len(), self.count * 3);
        unsafe {
            ptr::copy_nonoverlapping(
                positions.as_ptr(),
                self.position_buf.data() as *mut f32,
                positions.len(),
            );
        }
    }

    pub fn deinit(&mut self, context: &gpu::Context) {
        context.destroy_buffer(self.position_buf);
    }
}
