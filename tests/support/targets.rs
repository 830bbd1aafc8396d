use blade_particles::{Frame, FrameTarget, MountError};
use std::{cell::RefCell, rc::Rc};

/// What a [`RecordingTarget`] saw, shared with the test after the canvas took it.
#[derive(Default)]
pub struct Log {
    pub frames: usize,
    pub last_positions: Vec<f32>,
    pub last_color: Option<glam::Vec3>,
    pub released: bool,
}

/// Headless frame target standing in for the GPU renderer.
pub struct RecordingTarget {
    log: Rc<RefCell<Log>>,
}

impl RecordingTarget {
    pub fn new() -> (Self, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        (Self { log: log.clone() }, log)
    }
}

impl FrameTarget for RecordingTarget {
    fn draw(&mut self, frame: &Frame) {
        let mut log = self.log.borrow_mut();
        log.frames += 1;
        log.last_positions = frame.positions.to_vec();
        log.last_color = Some(frame.color);
    }
}

impl Drop for RecordingTarget {
    fn drop(&mut self) {
        self.log.borrow_mut().released = true;
    }
}

pub fn no_context(_: &blade_particles::FieldConfig) -> Result<RecordingTarget, MountError> {
    Err(MountError::ContextUnavailable("headless test".to_string()))
}
