use std::time::Instant;

use anyhow::{Context, Result};
use pixels::{Pixels, SurfaceTexture};
use tracing::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use torus_life_core::{Directive, InputSnapshot, RestartCause, Session};

use crate::render;

const WINDOW_TITLE: &str = "Conway's Game of Life";

/// Open the window and drive the session from the event loop until quit.
///
/// Input is sampled once per tick; a tick fires whenever the effective delay
/// has elapsed, and each tick redraws the freshly advanced board. The initial
/// board is presented once before the first tick.
pub fn run(mut session: Session) -> Result<()> {
    let side = session.config().surface_side();
    let cell_px = session.config().cell_px;
    let color = session.config().color;
    let tick_delay = session.config().effective_tick_delay();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(side as f64, side as f64))
        .with_min_inner_size(LogicalSize::new(side as f64, side as f64))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to open window")?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels =
        Pixels::new(side, side, surface_texture).context("failed to create pixel surface")?;

    render::draw(
        session.grid(),
        session.ages(),
        cell_px,
        color,
        pixels.frame_mut(),
    );
    pixels.render().context("failed to present first frame")?;

    let mut input = WinitInputHelper::new();
    let mut last_tick = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if let Event::RedrawRequested(_) = event {
            render::draw(
                session.grid(),
                session.ages(),
                cell_px,
                color,
                pixels.frame_mut(),
            );
            if let Err(err) = pixels.render() {
                error!("frame present failed: {err}");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if input.update(&event) {
            if input.quit() {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
                return;
            }
            if last_tick.elapsed() < tick_delay {
                return;
            }
            last_tick = Instant::now();

            let snapshot = InputSnapshot {
                restart: input.key_held(VirtualKeyCode::R),
                quit: input.key_held(VirtualKeyCode::Escape),
            };
            let survived = session.steps();
            match session.apply(snapshot) {
                Directive::Quit => {
                    info!("quit requested");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                Directive::Restarted(RestartCause::KeyHeld) => {
                    info!(ticks = survived, "board restarted by key");
                }
                Directive::Restarted(RestartCause::StepCap) => {
                    info!(
                        ticks = survived,
                        step_cap = session.config().step_cap,
                        "board restarted by step cap"
                    );
                }
                Directive::Continue => {}
            }
            session.advance();
            window.request_redraw();
        }
    });
}
