//! The page chrome controller.
//!
//! ARCHITECTURE
//! ============
//! [`ChromeCore`] owns every piece of mutable state (header visibility, the
//! frame gate, timer tickets, the RNG) and turns measurements into decisions.
//! It has no browser dependency and is unit-tested natively.
//!
//! [`Controller`] owns the `web_sys` handles. It is built once when the
//! document is ready, registers every listener, and then sits in a
//! thread-local for the rest of the page's life. Each feature installs
//! independently: a missing anchor skips that feature, and a DOM failure is
//! logged without stopping the others.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, MouseEvent, Window,
};

use crate::assets::{CONSOLE_BANNER, GLOBAL_STYLESHEET, PROGRESS_BAR_CSS};
use crate::background::{Decorations, PulseSpec, follows_pointer, parallax_patch};
use crate::config::ChromeConfig;
use crate::consts::{
    BACKGROUND_ID, CONFIG_ATTRIBUTE, FLOATING_SHAPE_SELECTOR, GLITCH_MS, LOGO_LINK_SELECTOR, LOGO_SELECTOR,
    MAIN_HEADER_SELECTOR, REVEAL_SELECTOR, SCROLL_SETTLE_MS, SPARKLE_SELECTOR, STICKY_HEADER_ID, VISIBLE_CLASS,
    YEAR_ID,
};
use crate::dom::{self, Listeners};
use crate::error::ChromeError;
use crate::feature::{Anchor, Feature};
use crate::header::{FrameGate, HeaderChange, StickyHeader};
use crate::interaction::{Role, glitch_clear, glitch_start, patch_for, sparkle_patch};
use crate::keys::Shortcut;
use crate::progress::{scroll_percent, width_patch};
use crate::reveal::{self, ObserverOptions};
use crate::style::StylePatch;
use crate::timer::{LatestWins, Ticket};

/// Controller state, independent of the browser.
pub struct ChromeCore {
    pub config: ChromeConfig,
    pub header: StickyHeader,
    pub frame: FrameGate,
    pub glitch: LatestWins,
    pub settle: LatestWins,
    /// Last progress percentage written to the bar.
    pub progress: f64,
    /// Progress at the most recent scroll settle.
    pub settled_progress: Option<f64>,
    rng: SmallRng,
}

impl ChromeCore {
    /// `fallback_seed` is used when the config does not pin one.
    #[must_use]
    pub fn new(config: ChromeConfig, fallback_seed: u64) -> Self {
        let seed = config.seed.unwrap_or(fallback_seed);
        Self {
            config,
            header: StickyHeader::default(),
            frame: FrameGate::default(),
            glitch: LatestWins::default(),
            settle: LatestWins::default(),
            progress: 0.0,
            settled_progress: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn decorations(&mut self) -> Decorations {
        Decorations::generate(&mut self.rng)
    }

    /// Runs inside the frame callback: reopens the gate and evaluates the header.
    pub fn on_header_frame(&mut self, scroll_top: f64, header_bottom: f64) -> Option<HeaderChange> {
        self.frame.release();
        self.header.on_scroll(scroll_top, header_bottom)
    }

    pub fn on_progress(&mut self, scroll_top: f64, doc_height: f64, viewport_height: f64) -> StylePatch {
        self.progress = scroll_percent(scroll_top, doc_height, viewport_height);
        width_patch(self.progress)
    }

    /// Start the glitch; any earlier pending clear is superseded.
    pub fn on_logo_click(&mut self) -> (Ticket, StylePatch) {
        (self.glitch.arm(), glitch_start())
    }

    pub fn on_glitch_elapsed(&mut self, ticket: Ticket) -> Option<StylePatch> {
        self.glitch.settle(ticket).then(glitch_clear)
    }

    pub fn on_scroll_event(&mut self) -> Ticket {
        self.settle.arm()
    }

    /// Trailing edge of a scroll burst. Returns the settled progress for the
    /// latest ticket only.
    pub fn on_scroll_settled(&mut self, ticket: Ticket) -> Option<f64> {
        if !self.settle.settle(ticket) {
            return None;
        }
        self.settled_progress = Some(self.progress);
        self.settled_progress
    }

    /// Parallax patch for a pointer at (`x`, `y`) in a viewport of the given size.
    #[must_use]
    pub fn on_pointer_move(&self, x: f64, y: f64, width: f64, height: f64) -> Option<StylePatch> {
        if !self.config.parallax || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(parallax_patch(x / width, y / height))
    }
}

/// Banner for the developer console. Printed directly, so the configured log
/// level never hides it.
#[must_use]
pub fn banner_text(config: &ChromeConfig) -> Option<&'static str> {
    config.banner.then_some(CONSOLE_BANNER)
}

/// Footer year text.
#[must_use]
pub fn year_text(year: u32) -> String {
    format!("{year:04}")
}

type SharedCore = Rc<RefCell<ChromeCore>>;

thread_local! {
    static CONTROLLER: RefCell<Option<Controller>> = const { RefCell::new(None) };
}

/// Install the logger and mount the controller once the DOM is parsed.
pub fn boot() {
    // Fails only when a logger is already installed, which then takes this.
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        log::warn!("console logger not installed: {e}");
    }
    log::set_max_level(log::LevelFilter::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("{}", ChromeError::NoDocument);
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(mount);
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("could not wait for DOMContentLoaded: {}", ChromeError::from(e));
        }
    } else {
        mount();
    }
}

fn mount() {
    let config = read_config().unwrap_or_else(|e| {
        log::warn!("{e}; using defaults");
        ChromeConfig::default()
    });
    log::set_max_level(config.level().to_level_filter());

    match Controller::install(config) {
        Ok(controller) => CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller)),
        Err(e) => log::warn!("page chrome not installed: {e}"),
    }
}

fn read_config() -> Result<ChromeConfig, ChromeError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    ChromeConfig::from_attribute(raw.as_deref())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

/// Browser-side controller. See the module docs.
pub struct Controller {
    window: Window,
    document: Document,
    core: SharedCore,
    listeners: Listeners,
}

impl Controller {
    pub fn install(config: ChromeConfig) -> Result<Self, ChromeError> {
        let window = web_sys::window().ok_or(ChromeError::NoWindow)?;
        let document = window.document().ok_or(ChromeError::NoDocument)?;
        let core = Rc::new(RefCell::new(ChromeCore::new(config, random_seed())));
        let mut controller = Self { window, document, core, listeners: Listeners::default() };

        for feature in Feature::ALL {
            if let Some(anchor) = feature.missing_anchor(|anchor| controller.has_anchor(anchor)) {
                log::debug!("{anchor:?} absent; {} skipped", feature.name());
                continue;
            }
            if let Err(e) = controller.install_feature(feature) {
                log::warn!("{} not installed: {e}", feature.name());
            }
        }

        if let Some(banner) = banner_text(&controller.core.borrow().config) {
            web_sys::console::log_1(&JsValue::from_str(banner));
        }
        log::debug!("page chrome ready ({} listeners)", controller.listeners.len());
        Ok(controller)
    }

    fn has_anchor(&self, anchor: Anchor) -> bool {
        match anchor {
            Anchor::Id(id) => self.document.get_element_by_id(id).is_some(),
            Anchor::Selector(selector) => matches!(self.document.query_selector(selector), Ok(Some(_))),
        }
    }

    fn install_feature(&mut self, feature: Feature) -> Result<(), ChromeError> {
        match feature {
            Feature::Stylesheet => self.install_stylesheet(),
            Feature::StickyHeader => self.install_sticky_header(),
            Feature::LogoLinks => self.install_logo_links(),
            Feature::HoverEffects => self.install_interactions(),
            Feature::LogoGlitch => self.install_logo_glitch(),
            Feature::ScrollReveal => self.install_scroll_reveal(),
            Feature::ProgressBar => self.install_progress_bar(),
            Feature::ScrollSettle => self.install_scroll_settle(),
            Feature::KeyboardShortcuts => self.install_shortcuts(),
            Feature::Background => self.install_background(),
            Feature::Parallax => self.install_parallax(),
            Feature::YearStamp => self.install_year_stamp(),
        }
    }

    fn install_stylesheet(&mut self) -> Result<(), ChromeError> {
        let Some(head) = self.document.head() else {
            return Ok(());
        };
        let style = self.document.create_element("style")?;
        style.set_text_content(Some(GLOBAL_STYLESHEET));
        head.append_child(&style)?;
        Ok(())
    }

    fn install_sticky_header(&mut self) -> Result<(), ChromeError> {
        let Some(sticky) = dom::by_id(&self.document, STICKY_HEADER_ID) else {
            log::debug!("no #{STICKY_HEADER_ID}; sticky header skipped");
            return Ok(());
        };
        let Some(main_header) = dom::query_one(&self.document, MAIN_HEADER_SELECTOR)? else {
            log::debug!("no {MAIN_HEADER_SELECTOR}; sticky header skipped");
            return Ok(());
        };

        let window = self.window.clone();
        let core = Rc::clone(&self.core);
        self.listeners.on(&self.window, "scroll", move |_| {
            schedule_header_update(&window, &core, &sticky, &main_header);
        })
    }

    fn install_logo_links(&mut self) -> Result<(), ChromeError> {
        for link in dom::query_all(&self.document, LOGO_LINK_SELECTOR)? {
            let window = self.window.clone();
            self.listeners.on(&link, "click", move |event: Event| {
                event.prevent_default();
                dom::smooth_scroll_to(&window, 0.0);
            })?;
        }
        Ok(())
    }

    fn install_interactions(&mut self) -> Result<(), ChromeError> {
        for role in Role::ALL {
            let elements = dom::query_all(&self.document, role.selector())?;
            log::debug!("{} {role:?} element(s) wired", elements.len());
            for element in elements {
                for &phase in role.phases() {
                    let own = patch_for(role, phase);
                    let sparkle = sparkle_patch(role, phase);
                    if own.is_none() && sparkle.is_none() {
                        continue;
                    }
                    let target = element.clone();
                    self.listeners.on(&element, phase.event_name(), move |_| {
                        if let Some(patch) = &own {
                            dom::apply_logged(&target, patch);
                        }
                        if let Some(patch) = &sparkle {
                            apply_to_sparkles(&target, patch);
                        }
                    })?;
                }
            }
        }
        Ok(())
    }

    fn install_logo_glitch(&mut self) -> Result<(), ChromeError> {
        let Some(logo) = dom::query_one(&self.document, LOGO_SELECTOR)? else {
            return Ok(());
        };
        let core = Rc::clone(&self.core);
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let target = logo.clone();
        self.listeners.on(&logo, "click", move |_| {
            let (ticket, start) = core.borrow_mut().on_logo_click();
            dom::apply_logged(&target, &start);

            let core = Rc::clone(&core);
            let target = target.clone();
            let clear = Timeout::new(GLITCH_MS, move || {
                let patch = core.borrow_mut().on_glitch_elapsed(ticket);
                if let Some(patch) = patch {
                    dom::apply_logged(&target, &patch);
                }
            });
            // Dropping a pending Timeout clears it.
            drop(pending.borrow_mut().replace(clear));
        })
    }

    fn install_scroll_reveal(&mut self) -> Result<(), ChromeError> {
        let targets = dom::query_all(&self.document, REVEAL_SELECTOR)?;
        if targets.is_empty() {
            return Ok(());
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let Some(patch) = reveal::on_entry(entry.is_intersecting()) else {
                        continue;
                    };
                    let target = entry.target();
                    if let Some(element) = target.dyn_ref::<HtmlElement>() {
                        dom::apply_logged(element, &patch);
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let options = ObserverOptions::default();
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        // The callback must outlive every element hidden below.
        self.listeners.keep_observer(observer.clone(), callback);

        let hidden = reveal::hidden_patch();
        let armed = reveal::arm(
            &targets,
            |element| dom::apply(element, &hidden),
            |element| observer.observe(element),
            |e| log::warn!("reveal target left visible: {e}"),
        );
        log::debug!("{armed} of {} reveal target(s) armed", targets.len());
        Ok(())
    }

    fn install_progress_bar(&mut self) -> Result<(), ChromeError> {
        let Some(body) = self.document.body() else {
            return Ok(());
        };
        let bar = dom::create_div(&self.document)?;
        bar.style().set_css_text(PROGRESS_BAR_CSS);
        body.append_child(&bar)?;

        let window = self.window.clone();
        let document = self.document.clone();
        let core = Rc::clone(&self.core);
        self.listeners.on(&self.window, "scroll", move |_| {
            let patch = core.borrow_mut().on_progress(
                dom::scroll_top(&window),
                dom::doc_height(&document),
                dom::viewport_height(&window),
            );
            dom::apply_logged(&bar, &patch);
        })
    }

    fn install_scroll_settle(&mut self) -> Result<(), ChromeError> {
        let core = Rc::clone(&self.core);
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
        self.listeners.on(&self.window, "scroll", move |_| {
            let ticket = core.borrow_mut().on_scroll_event();
            let core = Rc::clone(&core);
            let settle = Timeout::new(SCROLL_SETTLE_MS, move || {
                let settled = core.borrow_mut().on_scroll_settled(ticket);
                if let Some(percent) = settled {
                    log::debug!("scroll settled at {percent:.1}%");
                }
            });
            drop(pending.borrow_mut().replace(settle));
        })
    }

    fn install_shortcuts(&mut self) -> Result<(), ChromeError> {
        let window = self.window.clone();
        let document = self.document.clone();
        self.listeners.on(&self.document, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(shortcut) = Shortcut::from_key(&key.key(), key.ctrl_key()) else {
                return;
            };
            event.prevent_default();
            dom::smooth_scroll_to(&window, shortcut.target(dom::doc_height(&document)));
        })
    }

    fn install_background(&mut self) -> Result<(), ChromeError> {
        let Some(container) = dom::by_id(&self.document, BACKGROUND_ID) else {
            log::debug!("no #{BACKGROUND_ID}; background skipped");
            return Ok(());
        };
        let decorations = self.core.borrow_mut().decorations();
        for shape in &decorations.shapes {
            let node = dom::create_div(&self.document)?;
            node.set_class_name(&shape.class_name());
            dom::apply(&node, &shape.style_patch())?;
            container.append_child(&node)?;
        }
        for pulse in &decorations.pulses {
            let node = dom::create_div(&self.document)?;
            node.set_class_name(PulseSpec::CLASS_NAME);
            dom::apply(&node, &pulse.style_patch())?;
            container.append_child(&node)?;
        }
        Ok(())
    }

    fn install_parallax(&mut self) -> Result<(), ChromeError> {
        if !self.core.borrow().config.parallax {
            return Ok(());
        }
        let Some(container) = dom::by_id(&self.document, BACKGROUND_ID) else {
            return Ok(());
        };
        let followers: Vec<HtmlElement> = dom::query_all_in(&container, FLOATING_SHAPE_SELECTOR)?
            .into_iter()
            .enumerate()
            .filter(|(index, _)| follows_pointer(*index))
            .map(|(_, shape)| shape)
            .collect();
        if followers.is_empty() {
            return Ok(());
        }

        let window = self.window.clone();
        let core = Rc::clone(&self.core);
        self.listeners.on(&self.document, "mousemove", move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let patch = core.borrow().on_pointer_move(
                f64::from(mouse.client_x()),
                f64::from(mouse.client_y()),
                dom::viewport_width(&window),
                dom::viewport_height(&window),
            );
            if let Some(patch) = patch {
                for shape in &followers {
                    dom::apply_logged(shape, &patch);
                }
            }
        })
    }

    fn install_year_stamp(&mut self) -> Result<(), ChromeError> {
        let Some(stamp) = dom::by_id(&self.document, YEAR_ID) else {
            return Ok(());
        };
        let year = js_sys::Date::new_0().get_full_year();
        stamp.set_text_content(Some(year_text(year).as_str()));
        Ok(())
    }
}

/// Queue one header evaluation for the next animation frame.
fn schedule_header_update(window: &Window, core: &SharedCore, sticky: &HtmlElement, main_header: &HtmlElement) {
    if !core.borrow_mut().frame.try_schedule() {
        return;
    }
    let frame = {
        let window = window.clone();
        let core = Rc::clone(core);
        let sticky = sticky.clone();
        let main_header = main_header.clone();
        Closure::once_into_js(move || update_sticky_header(&window, &core, &sticky, &main_header))
    };
    if window.request_animation_frame(frame.unchecked_ref()).is_err() {
        update_sticky_header(window, core, sticky, main_header);
    }
}

fn update_sticky_header(window: &Window, core: &SharedCore, sticky: &HtmlElement, main_header: &HtmlElement) {
    let header_bottom = f64::from(main_header.offset_top() + main_header.offset_height());
    let change = core.borrow_mut().on_header_frame(dom::scroll_top(window), header_bottom);
    let result = match change {
        Some(HeaderChange::Show) => sticky.class_list().add_1(VISIBLE_CLASS),
        Some(HeaderChange::Hide) => sticky.class_list().remove_1(VISIBLE_CLASS),
        None => Ok(()),
    };
    if let Err(e) = result {
        log::warn!("sticky header toggle failed: {}", ChromeError::from(e));
    }
}

fn apply_to_sparkles(button: &HtmlElement, patch: &StylePatch) {
    match dom::query_all_in(button, SPARKLE_SELECTOR) {
        Ok(sparkles) => {
            for sparkle in &sparkles {
                dom::apply_logged(sparkle, patch);
            }
        }
        Err(e) => log::warn!("sparkle lookup failed: {e}"),
    }
}
