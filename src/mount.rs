//! Binds each behavior to its page elements.
//!
//! Every behavior is attached independently: one that finds no elements is
//! skipped, and one that fails is logged without affecting the others.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlCanvasElement, Window};
use wasm_bindgen::JsCast;

use crate::animation::{frame_loop, run_typing, CounterTrigger, StatCounter, TypingEffect};
use crate::config::EffectsConfig;
use crate::error::EffectsError;
use crate::host::dom::{self, BrowserScheduler, DomElement};
use crate::host::{Element, TaskHandle};
use crate::interaction::{CursorGlow, MobileMenu, TiltCard};
use crate::log;
use crate::math::Lcg;
use crate::particles::DotField;
use crate::render::CanvasContext;
use crate::scroll::{request_nav_update, stagger_indices, NavShrink, ProgressBar, RevealTarget};

struct Page {
    window: Window,
    document: Document,
    scheduler: BrowserScheduler,
}

/// Outcome of mounting: what attached, and the handle that stops the loops
pub struct Mounted {
    pub handle: TaskHandle,
    pub behaviors: Vec<&'static str>,
}

type Attach = fn(&Page, &EffectsConfig, &TaskHandle) -> Result<bool, EffectsError>;

const BEHAVIORS: [(&str, Attach); 9] = [
    ("reveal", attach_reveal),
    ("tilt", attach_tilt),
    ("counter", attach_counters),
    ("nav", attach_nav),
    ("glow", attach_glow),
    ("typing", attach_typing),
    ("dots", attach_dots),
    ("progress", attach_progress),
    ("menu", attach_menu),
];

pub fn mount(config: &EffectsConfig) -> Result<Mounted, EffectsError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let page = Page {
        scheduler: BrowserScheduler::new(window.clone()),
        window,
        document,
    };

    let handle = TaskHandle::new();
    let mut behaviors = Vec::new();
    for (name, attach) in BEHAVIORS {
        match attach(&page, config, &handle) {
            Ok(true) => {
                log::debug(&format!("{} mounted", name));
                behaviors.push(name);
            }
            Ok(false) => log::debug(&format!("{} skipped: elements not found", name)),
            Err(err) => log::warn(&format!("{} failed to mount: {}", name, err)),
        }
    }

    Ok(Mounted { handle, behaviors })
}

fn attach_reveal(page: &Page, config: &EffectsConfig, _handle: &TaskHandle) -> Result<bool, EffectsError> {
    let elements = dom::query_all(&page.document, &config.reveal.selectors.join(", "));
    if elements.is_empty() {
        return Ok(false);
    }

    let indices = stagger_indices(elements.iter().map(|el| el.parent_element()));
    let mut targets: Vec<RevealTarget<DomElement>> = elements
        .iter()
        .zip(indices)
        .map(|(el, index)| RevealTarget::new(DomElement(el.clone()), index, &config.reveal))
        .collect();

    dom::observe_visibility(config.reveal.threshold, &elements, move |element, visibility| {
        targets
            .iter_mut()
            .find(|target| target.element().is(element))
            .map(|target| target.on_visibility(visibility))
            .unwrap_or(false)
    })?;
    Ok(true)
}

fn attach_tilt(page: &Page, config: &EffectsConfig, _handle: &TaskHandle) -> Result<bool, EffectsError> {
    let cards = dom::query_all(&page.document, &config.tilt.selectors.join(", "));
    for el in &cards {
        let card = Rc::new(TiltCard::new(DomElement(el.clone()), &config.tilt));

        let on_move = card.clone();
        dom::listen_mouse(el, "mousemove", move |event| {
            on_move.on_pointer_move(f64::from(event.client_x()), f64::from(event.client_y()));
        })?;
        dom::listen(el, "mouseleave", move |_| card.on_pointer_leave())?;
    }
    Ok(!cards.is_empty())
}

fn attach_counters(page: &Page, config: &EffectsConfig, handle: &TaskHandle) -> Result<bool, EffectsError> {
    let (elements, counters): (Vec<_>, Vec<_>) = dom::query_all(&page.document, &config.counter.selector)
        .into_iter()
        .map(|el| {
            let counter = StatCounter::new(DomElement(el.clone()), &config.counter);
            (el, Rc::new(RefCell::new(counter)))
        })
        .filter(|(_, counter)| counter.borrow().is_numeric())
        .unzip();
    if elements.is_empty() {
        return Ok(false);
    }

    let scheduler = page.scheduler.clone();
    let handle = handle.clone();
    dom::observe_visibility(config.counter.threshold, &elements, move |element, visibility| {
        let Some(counter) = counters.iter().find(|c| c.borrow().element().is(element)) else {
            return true;
        };
        let trigger = counter.borrow_mut().on_visibility(visibility);
        match trigger {
            CounterTrigger::Wait => false,
            CounterTrigger::Ignore => true,
            CounterTrigger::Start => {
                let counter = counter.clone();
                frame_loop(&scheduler, &handle, move || counter.borrow_mut().on_frame());
                true
            }
        }
    })?;
    Ok(true)
}

fn attach_nav(page: &Page, config: &EffectsConfig, _handle: &TaskHandle) -> Result<bool, EffectsError> {
    let Some(nav) = dom::query(&page.document, &config.nav.selector) else {
        return Ok(false);
    };

    let shrink = Rc::new(RefCell::new(NavShrink::new(DomElement(nav), &config.nav)));
    let window = page.window.clone();
    let scheduler = page.scheduler.clone();
    dom::listen(&page.window, "scroll", move |_| {
        let window = window.clone();
        request_nav_update(&shrink, &scheduler, move || dom::scroll_y(&window));
    })?;
    Ok(true)
}

fn attach_glow(page: &Page, config: &EffectsConfig, _handle: &TaskHandle) -> Result<bool, EffectsError> {
    let Some(hero) = dom::query(&page.document, &config.glow.region_selector) else {
        return Ok(false);
    };

    let layer = dom::create_element(&page.document, "div", &config.glow.layer_class)?;
    hero.append_child(&layer).map_err(EffectsError::dom)?;

    let glow = CursorGlow::new(DomElement(layer));
    let region = DomElement(hero.clone());
    dom::listen_mouse(&hero, "mousemove", move |event| {
        glow.on_pointer_move(
            &region.bounding_rect(),
            f64::from(event.client_x()),
            f64::from(event.client_y()),
        );
    })?;
    Ok(true)
}

fn attach_typing(page: &Page, config: &EffectsConfig, handle: &TaskHandle) -> Result<bool, EffectsError> {
    let Some(headline) = dom::query(&page.document, &config.typing.selector) else {
        return Ok(false);
    };

    let effect = Rc::new(RefCell::new(TypingEffect::begin(DomElement(headline), &config.typing)));
    run_typing(effect, &config.typing, &page.scheduler, handle);
    Ok(true)
}

fn attach_dots(page: &Page, config: &EffectsConfig, handle: &TaskHandle) -> Result<bool, EffectsError> {
    let Some(section) = page
        .document
        .get_element_by_id(&config.dots.section_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return Ok(false);
    };

    let canvas = dom::create_element(&page.document, "canvas", &config.dots.canvas_class)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| EffectsError::Dom("<canvas> is not an HtmlCanvasElement".to_string()))?;
    section
        .style()
        .set_property("position", "relative")
        .map_err(EffectsError::dom)?;
    section
        .insert_before(&canvas, section.first_child().as_ref())
        .map_err(EffectsError::dom)?;

    let context = Rc::new(CanvasContext::new(canvas)?);
    let field = Rc::new(RefCell::new(DotField::new(
        &config.dots,
        Lcg::from_unit(js_sys::Math::random()),
    )));

    let fit = {
        let context = context.clone();
        let field = field.clone();
        move || {
            let width = section.offset_width().max(0);
            let height = section.offset_height().max(0);
            context.resize(width as u32, height as u32);
            field.borrow_mut().resize(f64::from(width), f64::from(height));
        }
    };
    fit();
    dom::listen(&page.window, "resize", move |_| fit())?;

    frame_loop(&page.scheduler, handle, move || {
        field.borrow_mut().step();
        context.draw_dots(&field.borrow());
        true
    });
    Ok(true)
}

fn attach_progress(page: &Page, config: &EffectsConfig, _handle: &TaskHandle) -> Result<bool, EffectsError> {
    let Some(body) = page.document.body() else {
        return Ok(false);
    };

    let bar = dom::create_element(&page.document, "div", &config.progress.bar_class)?;
    body.prepend_with_node_1(&bar).map_err(EffectsError::dom)?;

    let progress = ProgressBar::new(DomElement(bar));
    let window = page.window.clone();
    let document = page.document.clone();
    dom::listen(&page.window, "scroll", move |_| {
        progress.on_scroll(
            dom::scroll_y(&window),
            dom::scroll_height(&document),
            dom::viewport_height(&window),
        );
    })?;
    Ok(true)
}

fn attach_menu(page: &Page, config: &EffectsConfig, _handle: &TaskHandle) -> Result<bool, EffectsError> {
    let (Some(nav), Some(links)) = (
        dom::query(&page.document, &config.menu.nav_selector),
        dom::query(&page.document, &config.menu.links_selector),
    ) else {
        return Ok(false);
    };

    let burger = dom::create_element(&page.document, "button", &config.menu.burger_class)?;
    burger
        .set_attribute("aria-label", &config.menu.aria_label)
        .map_err(EffectsError::dom)?;
    burger.set_inner_html("<span></span><span></span><span></span>");
    nav.append_child(&burger).map_err(EffectsError::dom)?;

    let menu = Rc::new(RefCell::new(MobileMenu::new(
        DomElement(links.clone()),
        DomElement(burger.clone()),
        &config.menu,
    )));

    let toggle = menu.clone();
    dom::listen(&burger, "click", move |_| toggle.borrow_mut().toggle())?;

    for link in dom::query_all_within(&links, "a") {
        let close = menu.clone();
        dom::listen(&link, "click", move |_| close.borrow_mut().close())?;
    }
    Ok(true)
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const LANDING: &str = r##"
        <nav><ul class="nav-links"><li><a href="#why">Why</a></li><li><a href="#team">Team</a></li></ul></nav>
        <div class="hero"><h1>Learn <em>differently</em></h1></div>
        <section id="why">
            <p>Small classes.</p>
            <div class="stat-item"><span class="stat-num">12+</span></div>
            <div class="stat-item"><span class="stat-num">∞</span></div>
        </section>
    "##;

    fn page_with(html: &str) -> Result<Document, EffectsError> {
        let document = dom::document(&dom::window()?)?;
        let body = document.body().ok_or(EffectsError::DocumentNotAvailable)?;
        body.set_inner_html(html);
        Ok(document)
    }

    fn find(document: &Document, selector: &str) -> Result<HtmlElement, EffectsError> {
        dom::query(document, selector).ok_or_else(|| EffectsError::Dom(format!("{} not found", selector)))
    }

    #[wasm_bindgen_test]
    fn test_empty_page_mounts_only_progress() -> Result<(), EffectsError> {
        page_with("")?;
        let mounted = mount(&EffectsConfig::default())?;
        mounted.handle.cancel();

        assert_eq!(mounted.behaviors, vec!["progress"]);
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_landing_page_mounts_present_behaviors() -> Result<(), EffectsError> {
        page_with(LANDING)?;
        let mounted = mount(&EffectsConfig::default())?;
        mounted.handle.cancel();

        for name in ["reveal", "counter", "nav", "glow", "typing", "dots", "progress", "menu"] {
            assert!(mounted.behaviors.contains(&name), "{} not mounted", name);
        }
        assert!(!mounted.behaviors.contains(&"tilt"));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_menu_burger_and_link_close() -> Result<(), EffectsError> {
        let document = page_with(LANDING)?;
        let mounted = mount(&EffectsConfig::default())?;
        mounted.handle.cancel();

        let burger = find(&document, "nav > .nav-burger")?;
        let links = find(&document, ".nav-links")?;
        assert_eq!(burger.tag_name(), "BUTTON");
        assert_eq!(burger.get_attribute("aria-label").as_deref(), Some("Toggle menu"));

        burger.click();
        assert!(links.class_list().contains("nav-open"));
        assert!(burger.class_list().contains("burger-active"));

        find(&document, ".nav-links a")?.click();
        assert!(!links.class_list().contains("nav-open"));
        assert!(!burger.class_list().contains("burger-active"));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_inserted_layers_land_in_place() -> Result<(), EffectsError> {
        let document = page_with(LANDING)?;
        let mounted = mount(&EffectsConfig::default())?;
        mounted.handle.cancel();

        let body = document.body().ok_or(EffectsError::DocumentNotAvailable)?;
        let bar = body.first_element_child().ok_or_else(|| EffectsError::Dom("empty body".into()))?;
        assert_eq!(bar.tag_name(), "DIV");
        assert!(bar.class_list().contains("scroll-progress"));

        let why = find(&document, "#why")?;
        let canvas = why.first_element_child().ok_or_else(|| EffectsError::Dom("empty #why".into()))?;
        assert_eq!(canvas.tag_name(), "CANVAS");
        assert!(canvas.class_list().contains("dot-canvas"));
        assert_eq!(why.style().get_property_value("position").ok().as_deref(), Some("relative"));

        let hero = find(&document, ".hero")?;
        let glow = hero.last_element_child().ok_or_else(|| EffectsError::Dom("empty .hero".into()))?;
        assert!(glow.class_list().contains("hero-glow"));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_initial_element_state() -> Result<(), EffectsError> {
        let document = page_with(LANDING)?;
        let mounted = mount(&EffectsConfig::default())?;
        mounted.handle.cancel();

        let stats = dom::query_all(&document, ".stat-num");
        assert_eq!(stats[1].text_content().as_deref(), Some("∞"));

        let items = dom::query_all(&document, ".stat-item");
        assert!(items.iter().all(|item| item.class_list().contains("reveal")));
        assert_eq!(items[0].style().get_property_value("transition-delay").ok().as_deref(), Some(""));
        assert_eq!(items[1].style().get_property_value("transition-delay").ok().as_deref(), Some("70ms"));

        assert_eq!(find(&document, ".hero h1 em")?.text_content().as_deref(), Some(""));
        Ok(())
    }
}
