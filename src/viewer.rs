//! Blocking chart display window
//!
//! Takes a rendered RGB frame and blits it to a window via softbuffer,
//! running the event loop until the user closes the window.

use std::num::NonZeroU32;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Open a fixed-size window showing the frame and block until it is closed.
///
/// `frame` must hold `width * height * 3` RGB888 bytes. The event loop
/// never returns; closing the window exits the process with status 0.
pub fn show(title: &str, width: u32, height: u32, frame: Vec<u8>) -> ! {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .expect("Failed to create window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(_) => {
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (win_w, win_h) = (size.width.max(1), size.height.max(1));
                if surface
                    .resize(
                        NonZeroU32::new(win_w).unwrap(),
                        NonZeroU32::new(win_h).unwrap(),
                    )
                    .is_err()
                {
                    return;
                }

                let mut buffer = match surface.buffer_mut() {
                    Ok(b) => b,
                    Err(_) => return,
                };

                // RGB frame -> 0xAARRGGBB, window area outside the frame stays black
                for px in buffer.iter_mut() {
                    *px = 0xFF00_0000;
                }
                for y in 0..win_h.min(height) {
                    for x in 0..win_w.min(width) {
                        let src = ((y * width + x) * 3) as usize;
                        let r = frame[src] as u32;
                        let g = frame[src + 1] as u32;
                        let b = frame[src + 2] as u32;
                        buffer[(y * win_w + x) as usize] = (0xFF << 24) | (r << 16) | (g << 8) | b;
                    }
                }

                if let Err(e) = buffer.present() {
                    tracing::warn!("Failed to present frame: {:?}", e);
                }
            }
            _ => {}
        }
    });
}
