//! Hero section: typewriter role line over a full-bleed shooting-star
//! canvas.
//!
//! Both engines live in the `fx` crate as pure state machines; this
//! component is the browser host. The typewriter runs as an async sleep
//! loop where each tick reports its own follow-up delay, the cursor blinks
//! on a fixed interval, and the starfield advances once per animation
//! frame. A shared cancellation flag set in `on_cleanup` stops all three
//! when the component unmounts.

use leptos::prelude::*;

use crate::content::{OWNER_NAME, OWNER_TAGLINE};

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[component]
pub fn Hero() -> impl IntoView {
    let typed = RwSignal::new(String::new());
    let cursor_on = RwSignal::new(true);
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let cancelled = Rc::new(Cell::new(false));
        {
            let cancelled = Rc::clone(&cancelled);
            on_cleanup(move || cancelled.set(true));
        }

        let started = StoredValue::new(false);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.get_value() {
                return;
            }
            started.set_value(true);

            start_typewriter(typed, cursor_on, Rc::clone(&cancelled));
            if let Err(err) = start_starfield(&canvas, Rc::clone(&cancelled)) {
                log::warn!("starfield disabled: {err:?}");
            }
        });
    }

    view! {
        <section id="hero" class="hero">
            <canvas class="hero__canvas" node_ref=canvas_ref></canvas>

            <div class="hero__content">
                <h1 class="hero__title">"Hi, I'm " <span class="hero__name">{OWNER_NAME}</span></h1>
                <p class="hero__subtitle">
                    <span class="hero__typed">{move || typed.get()}</span>
                    <span class="hero__cursor" class:hero__cursor--off=move || !cursor_on.get()>
                        "|"
                    </span>
                </p>
                <p class="hero__tagline">{OWNER_TAGLINE}</p>

                <div class="hero__actions">
                    <a class="btn btn--primary" href="#projects">
                        "View My Work"
                    </a>
                    <a class="btn btn--ghost" href="#contact">
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Spawn the typing loop and the cursor blink loop.
///
/// The typing loop waits whatever delay the previous tick returned, so the
/// type / delete / dwell cadence lives entirely in the engine. The blink
/// loop runs on its own fixed interval; the engine ignores toggles outside
/// the dwell, so the cursor holds steady while characters move.
#[cfg(feature = "hydrate")]
fn start_typewriter(typed: RwSignal<String>, cursor_on: RwSignal<bool>, cancelled: Rc<Cell<bool>>) {
    use std::time::Duration;

    use fx::consts::BLINK_INTERVAL_MS;
    use fx::typewriter::Typewriter;

    let titles: Vec<String> = crate::content::ROLE_TITLES
        .iter()
        .map(|title| (*title).to_owned())
        .collect();
    let engine = match Typewriter::new(titles) {
        Ok(engine) => Rc::new(RefCell::new(engine)),
        Err(err) => {
            log::warn!("typewriter disabled: {err}");
            return;
        }
    };

    {
        let engine = Rc::clone(&engine);
        let cancelled = Rc::clone(&cancelled);
        leptos::task::spawn_local(async move {
            let mut delay = engine.borrow().initial_delay();
            loop {
                gloo_timers::future::sleep(delay).await;
                if cancelled.get() {
                    break;
                }
                let mut engine = engine.borrow_mut();
                delay = engine.tick();
                typed.set(engine.text().to_owned());
            }
        });
    }

    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(Duration::from_millis(BLINK_INTERVAL_MS)).await;
            if cancelled.get() {
                break;
            }
            let mut engine = engine.borrow_mut();
            engine.toggle_cursor();
            cursor_on.set(engine.cursor_visible());
        }
    });
}

/// Size the canvas to the viewport, hook the resize listener, and start the
/// self-rescheduling `requestAnimationFrame` loop.
///
/// On cancellation the frame callback drops itself, which also drops the
/// resize closure it owns after unhooking it from the window.
#[cfg(feature = "hydrate")]
fn start_starfield(
    canvas: &web_sys::HtmlCanvasElement,
    cancelled: Rc<Cell<bool>>,
) -> Result<(), JsValue> {
    use fx::random::JsRandom;
    use fx::starfield::Starfield;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

    let field = Rc::new(RefCell::new(Starfield::new(width, height)));

    // Keep the backing store matched to the viewport; stars already in
    // flight keep their geometry.
    let on_resize = {
        let field = Rc::clone(&field);
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
            field.borrow_mut().resize(w, h);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let schedule = {
        let frame = Rc::clone(&frame);
        move || {
            if let Some(window) = web_sys::window() {
                if let Some(cb) = frame.borrow().as_ref() {
                    let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
                }
            }
        }
    };

    {
        let frame = Rc::clone(&frame);
        let field = Rc::clone(&field);
        let schedule = schedule.clone();
        let window = window.clone();
        let mut rng = JsRandom;
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            if cancelled.get() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    on_resize.as_ref().unchecked_ref(),
                );
                // Dropping the stored closure ends the loop; wasm-bindgen
                // defers the actual free until this call returns.
                frame.borrow_mut().take();
                return;
            }

            {
                let mut field = field.borrow_mut();
                field.advance(now_ms, &mut rng);
                fx::render::draw(&ctx, &field);
            }
            schedule();
        }) as Box<dyn FnMut(f64)>));
    }

    schedule();
    Ok(())
}
