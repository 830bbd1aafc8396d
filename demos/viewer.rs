use blade_particles as particles;
use rand::SeedableRng as _;
use std::time::Instant;

#[derive(argh::FromArgs)]
/// Interactive viewer for the portfolio particle canvases.
struct Args {
    /// canvas to show: "cycling" or "morphing"
    #[argh(option, default = "String::from(\"cycling\")")]
    mode: String,
    /// fixed random seed, for reproducible shapes
    #[argh(option)]
    seed: Option<u64>,
}

enum Example {
    Cycling(particles::CyclingCanvas<particles::Renderer>),
    Morphing {
        canvas: particles::MorphingCanvas<particles::Renderer>,
        selection: particles::Selection,
        skill_cursor: Option<usize>,
    },
}

impl Example {
    fn init(args: &Args, window: &winit::window::Window) -> Self {
        let rng: Box<dyn rand::RngCore> = match args.seed {
            Some(seed) => Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rngs::StdRng::from_entropy()),
        };
        let acquire = |config: &particles::FieldConfig| particles::Renderer::mount(window, config);
        match args.mode.as_str() {
            "morphing" => {
                let selection = particles::Selection::section(particles::Section::Internships);
                let canvas = particles::MorphingCanvas::mount(
                    &particles::FieldConfig::morphing(),
                    &selection,
                    rng,
                    acquire,
                );
                Self::Morphing {
                    canvas,
                    selection,
                    skill_cursor: None,
                }
            }
            other => {
                if other != "cycling" {
                    log::warn!("Unknown mode {:?}, showing the cycling canvas", other);
                }
                Self::Cycling(particles::CyclingCanvas::mount(
                    &particles::FieldConfig::cycling(),
                    rng,
                    acquire,
                ))
            }
        }
    }

    fn render(&mut self) -> bool {
        match *self {
            Self::Cycling(ref mut canvas) => canvas.canvas_mut().frame(),
            Self::Morphing {
                ref mut canvas,
                ref selection,
                ..
            } => canvas.frame(selection),
        }
    }

    fn on_cursor(&mut self, position: winit::dpi::PhysicalPosition<f64>) {
        let (x, y) = (position.x as f32, position.y as f32);
        match *self {
            Self::Cycling(ref mut canvas) => canvas.canvas_mut().pointer_moved(x, y),
            Self::Morphing { ref mut canvas, .. } => canvas.canvas_mut().pointer_moved(x, y),
        }
    }

    fn on_cursor_left(&mut self) {
        match *self {
            Self::Cycling(ref mut canvas) => canvas.canvas_mut().pointer_left(),
            Self::Morphing { ref mut canvas, .. } => canvas.canvas_mut().pointer_left(),
        }
    }

    fn on_click(&mut self) {
        if let Self::Cycling(ref mut canvas) = *self {
            if let Some(shape) = canvas.click(Instant::now()) {
                println!("{}", particles::Shape::descriptor(shape).name);
            }
        }
    }

    fn on_key(&mut self, code: winit::keyboard::KeyCode) {
        use winit::keyboard::KeyCode as Kc;

        let Self::Morphing {
            ref mut selection,
            ref mut skill_cursor,
            ..
        } = *self
        else {
            return;
        };
        let skills = particles::selector::SKILL_SHAPES;
        match code {
            Kc::Digit1 | Kc::Digit2 | Kc::Digit3 | Kc::Digit4 => {
                let index = match code {
                    Kc::Digit1 => 0,
                    Kc::Digit2 => 1,
                    Kc::Digit3 => 2,
                    _ => 3,
                };
                selection.section = particles::Section::ALL[index].id().to_string();
            }
            Kc::Tab => {
                let next = skill_cursor.map_or(0, |i| (i + 1) % skills.len());
                *skill_cursor = Some(next);
                selection.hovered_skill = Some(skills[next].0.to_string());
            }
            Kc::Backspace => {
                *skill_cursor = None;
                selection.hovered_skill = None;
            }
            _ => return,
        }
        log::info!("Selection: {:?}", selection);
    }

    fn deinit(&mut self) {
        match *self {
            Self::Cycling(ref mut canvas) => canvas.canvas_mut().unmount(),
            Self::Morphing { ref mut canvas, .. } => canvas.canvas_mut().unmount(),
        }
    }
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = match args.mode.as_str() {
        "morphing" => particles::FieldConfig::morphing(),
        _ => particles::FieldConfig::cycling(),
    };
    let event_loop = winit::event_loop::EventLoop::new().unwrap();
    let window_attributes = winit::window::Window::default_attributes()
        .with_title("blade-particles")
        .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height))
        .with_resizable(false)
        .with_transparent(true);
    let window = event_loop.create_window(window_attributes).unwrap();

    let mut example = Example::init(&args, &window);
    // Cleared once the canvas stops asking for frames, e.g. after a failed mount.
    let mut running = true;

    event_loop
        .run(|event, target| {
            target.set_control_flow(if running {
                winit::event_loop::ControlFlow::Poll
            } else {
                winit::event_loop::ControlFlow::Wait
            });
            match event {
                winit::event::Event::AboutToWait => {
                    if running {
                        window.request_redraw();
                    }
                }
                winit::event::Event::WindowEvent { event, .. } => match event {
                    winit::event::WindowEvent::KeyboardInput {
                        event:
                            winit::event::KeyEvent {
                                physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                                state: winit::event::ElementState::Pressed,
                                ..
                            },
                        ..
                    } => {
                        if key_code == winit::keyboard::KeyCode::Escape {
                            target.exit();
                        }
                        example.on_key(key_code);
                    }
                    winit::event::WindowEvent::CursorMoved { position, .. } => {
                        example.on_cursor(position);
                    }
                    winit::event::WindowEvent::CursorLeft { .. } => {
                        example.on_cursor_left();
                    }
                    winit::event::WindowEvent::MouseInput {
                        state: winit::event::ElementState::Pressed,
                        button: winit::event::MouseButton::Left,
                        ..
                    } => {
                        example.on_click();
                    }
                    winit::event::WindowEvent::CloseRequested => {
                        target.exit();
                    }
                    winit::event::WindowEvent::RedrawRequested => {
                        running = example.render();
                    }
                    _ => {}
                },
                _ => {}
            }
        })
        .unwrap();

    example.deinit();
}
