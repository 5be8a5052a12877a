//! DOM pages layered over (or in place of) the globe canvas.
//!
//! Each `render_*` builds one view as an HTML string into the
//! `#page-overlay` container; the `set_*`/`update_*` functions patch the
//! live DOM in place. Static looks live in the page stylesheet; inline
//! styles carry only data-driven values (positions, heights, the backdrop).

use crate::dom;
use app_core::constants::PLAYER_BAR_COUNT;
use app_core::content::{Location, LOCATIONS, PHRASES, VIDEOS};
use app_core::notepad::PhraseDeck;
use app_core::player::Player;
use app_core::tour::{MapView, TourStop};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn overlay_root(document: &web::Document) -> Option<web::Element> {
    document.get_element_by_id("page-overlay")
}

// ---------------- Globe landing page ----------------

/// Chrome around the globe canvas: title, hover label, instruction line.
pub fn render_globe(document: &web::Document) {
    let Some(root) = overlay_root(document) else {
        return;
    };
    root.set_inner_html(
        "<h1 class='globe-title'>GLOBEVIBE</h1>\
         <div id='globe-hint' class='globe-hint hidden'>Click to explore Thailand! \u{1F1F9}\u{1F1ED}</div>\
         <p class='globe-instruction'>\u{1F446} Click on Thailand to begin your cultural journey</p>",
    );
    log::info!("[page] globe");
}

/// Show or hide the "Click to explore Thailand!" label over the flag.
#[inline]
pub fn set_globe_hint_visible(document: &web::Document, visible: bool) {
    dom::set_hidden_by_id(document, "globe-hint", !visible);
}

// ---------------- Thailand map page ----------------

fn push_map_pin(html: &mut String, loc: &Location) {
    html.push_str(&format!(
        "<a id='map-pin-{id}' class='map-pin' href='#/location/{id}' \
         style='left:{x:.0}%;top:{y:.0}%'>\u{1F4CD}\
         <div id='map-card-{id}' class='map-card hidden'>\
         <span class='map-card-spark'>\u{2728}</span>\
         <p class='map-card-cta'>Click to explore!</p>\
         <p class='map-card-name'>{name}</p>\
         <span class='chip'>{category}</span>\
         <span class='stars'>\u{2B50} {rating:.1}</span>\
         </div></a>",
        id = loc.id,
        x = loc.map_pos[0],
        y = loc.map_pos[1],
        name = loc.name,
        category = loc.category.label(),
        rating = loc.rating,
    ));
}

fn push_place_card(html: &mut String, loc: &Location) {
    html.push_str(&format!(
        "<a class='place-card' href='#/location/{id}'>\
         <p class='place-name'>{name}</p>\
         <p class='place-city'>{city}</p>\
         <span class='chip'>{category}</span>\
         <span class='stars'>\u{2B50} {rating:.1}</span>\
         </a>",
        id = loc.id,
        name = loc.name,
        city = loc.city,
        category = loc.category.label(),
        rating = loc.rating,
    ));
}

/// Three columns: videos, the pinned map, the phrase notepad.
pub fn render_thailand(document: &web::Document, deck: &PhraseDeck) {
    let Some(root) = overlay_root(document) else {
        return;
    };
    let mut html = String::new();
    html.push_str(
        "<div class='thai-page'>\
         <header class='thai-header'>\
         <h1 class='thai-title'>\u{1F1F9}\u{1F1ED} THAILAND</h1>\
         <a class='back-link' href='#/'>\u{2190} Back to Globe</a>\
         </header>\
         <div class='thai-columns'>",
    );

    // left column: videos
    html.push_str(
        "<section class='video-panel'>\
         <h2 class='panel-title'>\u{1F3A5} Discover Thailand</h2>\
         <p class='panel-sub'>Watch these amazing videos!</p>",
    );
    for video in VIDEOS.iter() {
        html.push_str(&format!(
            "<div class='video-frame'><iframe src='{url}' title='{title}' \
             allow='accelerometer; autoplay; clipboard-write; encrypted-media; \
             gyroscope; picture-in-picture' allowfullscreen></iframe></div>",
            url = video.url,
            title = video.title,
        ));
    }
    html.push_str("</section>");

    // center column: map with pins and per-pin hover cards
    html.push_str(
        "<section class='map-panel'>\
         <h2 class='panel-title'>\u{1F4CD} Explore Beautiful Places</h2>\
         <div class='map-area'>\
         <img class='map-image' src='/assets/thailand2.jpg' alt='Thailand Map'>",
    );
    for loc in LOCATIONS.iter() {
        push_map_pin(&mut html, loc);
    }
    html.push_str("</div><div class='place-list'>");
    for loc in LOCATIONS.iter() {
        push_place_card(&mut html, loc);
    }
    html.push_str("</div></section>");

    // right column: notepad shell, slide content patched by render_notepad
    html.push_str(
        "<section class='notepad'>\
         <div class='notepad-pin'></div>\
         <h2 class='notepad-title'>\u{1F1F9}\u{1F1ED} Learn Thai Words</h2>\
         <p id='notepad-count' class='notepad-count'></p>\
         <div id='notepad-slide' class='notepad-slide'></div>\
         <div class='notepad-dots'>",
    );
    for i in 0..deck.len() {
        html.push_str(&format!(
            "<button id='notepad-dot-{i}' class='notepad-dot'></button>"
        ));
    }
    html.push_str(
        "</div>\
         <div class='notepad-arrows'>\
         <button id='notepad-prev' class='notepad-arrow'>\u{2039}</button>\
         <button id='notepad-next' class='notepad-arrow'>\u{203A}</button>\
         </div>\
         <p class='notepad-footer'>\u{2728} Practice makes perfect! \u{2728}</p>\
         </section>",
    );

    html.push_str("</div></div>");
    root.set_inner_html(&html);
    render_notepad(document, deck);
    log::info!("[page] thailand");
}

/// Show the hover card of the hovered pin and hide the rest.
pub fn update_map_hover(document: &web::Document, map: &MapView) {
    for loc in LOCATIONS.iter() {
        dom::set_hidden_by_id(
            document,
            &format!("map-card-{}", loc.id),
            !map.is_hovered(loc.id),
        );
    }
}

/// Patch the notepad to the deck's current slide.
pub fn render_notepad(document: &web::Document, deck: &PhraseDeck) {
    let Some(phrase) = PHRASES.get(deck.index()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id("notepad-count") {
        el.set_inner_html(&format!("Word {} of {}", deck.index() + 1, deck.len()));
    }
    if let Some(el) = document.get_element_by_id("notepad-slide") {
        el.set_inner_html(&format!(
            "<h3 class='phrase-title'>{}</h3>\
             <div class='phrase-card'>\
             <p class='phrase-thai'>{}</p>\
             <p class='phrase-say'>{}</p>\
             </div>",
            phrase.title, phrase.thai, phrase.pronunciation
        ));
        // the stylesheet transitions opacity, which yields the slide fade
        _ = el.set_attribute(
            "style",
            if deck.is_animating() {
                "opacity:0"
            } else {
                "opacity:1"
            },
        );
    }
    for i in 0..deck.len() {
        if let Some(dot) = document.get_element_by_id(&format!("notepad-dot-{i}")) {
            _ = dot.set_attribute(
                "class",
                if i == deck.index() {
                    "notepad-dot active"
                } else {
                    "notepad-dot"
                },
            );
        }
    }
    set_enabled(document, "notepad-prev", deck.has_previous());
    set_enabled(document, "notepad-next", deck.has_next());
}

// ---------------- Location page ----------------

/// Full-screen stop page: backdrop, chrome, info panel, guide, player popup.
pub fn render_location(document: &web::Document, stop: &TourStop, player: &Player) {
    let Some(root) = overlay_root(document) else {
        return;
    };
    let loc = stop.location();
    let mut html = String::new();
    html.push_str(&format!(
        "<div class='stop-page' style=\"background-image:url('{}')\">",
        loc.backdrop
    ));

    // corner chrome
    html.push_str(
        "<button id='player-open' class='round-button player-open' \
         title='Open Music Player'>\u{1F3B5}</button>\
         <a class='round-button back-top' href='#/thailand' \
         title='Back to Thailand Map'>\u{1F3E0}</a>\
         <a class='round-button back-side' href='#/thailand' \
         title='Back to Thailand Map'>\u{2039}</a>\
         <button id='next-stop' class='round-button next-stop'>\u{203A}</button>",
    );
    html.push_str(&format!("<h1 class='stop-title'>{}</h1>", loc.name));

    // info toggle + panel
    html.push_str(&format!(
        "<div class='info-corner'>\
         <button id='info-toggle' class='info-toggle'>Info \u{25BC}</button>\
         <div id='info-panel' class='info-panel hidden'>\
         <h3>Description</h3><p>{description}</p>\
         <h3>History</h3><p>{history}</p>\
         <h3>Tips</h3><p>{tips}</p>\
         <div class='info-meta'>\
         <span class='chip'>{category}</span>\
         <span class='stars'>\u{2B50} {rating:.1}</span>\
         </div></div></div>",
        description = loc.description,
        history = loc.history,
        tips = loc.tips,
        category = loc.category.label(),
        rating = loc.rating,
    ));

    // guide character and its message bubble. The wrapper owns the inline
    // position so toggling the bubble never disturbs it.
    html.push_str(&format!(
        "<div class='guide-spot' style='left:{x:.0}%;top:{y:.0}%'>\
         <button id='guide-icon' class='guide-icon'>\u{2139}\u{FE0F}</button>\
         <div id='guide-bubble' class='guide-bubble hidden'>\
         <p class='guide-label'>Local Guide</p>\
         <p class='guide-message'>{message}</p>\
         </div></div>",
        x = loc.guide.pos[0],
        y = loc.guide.pos[1],
        message = loc.guide.message,
    ));

    push_player_popup(&mut html, loc);
    html.push_str("</div>");
    root.set_inner_html(&html);
    update_player_controls(document, player);
    log::info!("[page] location {}", loc.id);
}

fn push_player_popup(html: &mut String, loc: &Location) {
    html.push_str(&format!(
        "<div id='player-popup' class='player-backdrop hidden'>\
         <div class='player-shell'>\
         <button id='player-close' class='player-close'>\u{D7}</button>\
         <div class='player-screen'>\
         <div class='player-marquee'><span>\u{266A} {} \u{266A}</span></div>\
         <div class='player-eq'>",
        loc.name
    ));
    for i in 0..PLAYER_BAR_COUNT {
        html.push_str(&format!("<div id='eq-bar-{i}' class='eq-bar'></div>"));
    }
    html.push_str(
        "</div></div>\
         <p class='player-brand'>RETRO iPOD</p>\
         <p class='player-sub'>Music Player</p>\
         <div class='player-volume'>\
         <div class='player-volume-row'>\
         <span>Volume</span><span id='volume-percent'></span>\
         </div>\
         <input id='volume-slider' type='range' min='0' max='1' step='0.01'>\
         </div>\
         <button id='player-mute' class='player-mute'></button>\
         <div class='player-wheel'><div class='player-wheel-inner'></div></div>\
         </div></div>",
    );
}

/// Show or hide the guide's message bubble.
#[inline]
pub fn set_guide_visible(document: &web::Document, visible: bool) {
    dom::set_hidden_by_id(document, "guide-bubble", !visible);
}

/// Open or fold the info panel, flipping the toggle's arrow.
pub fn set_info_open(document: &web::Document, open: bool) {
    dom::set_hidden_by_id(document, "info-panel", !open);
    if let Some(el) = document.get_element_by_id("info-toggle") {
        el.set_inner_html(if open {
            "Info \u{25B2}"
        } else {
            "Info \u{25BC}"
        });
    }
}

/// Show or hide the player popup.
#[inline]
pub fn set_player_open(document: &web::Document, open: bool) {
    dom::set_hidden_by_id(document, "player-popup", !open);
}

/// Mirror volume and mute state onto the popup controls.
pub fn update_player_controls(document: &web::Document, player: &Player) {
    if let Some(el) = document.get_element_by_id("volume-percent") {
        el.set_inner_html(&format!("{}%", (player.volume() * 100.0).round() as u32));
    }
    if let Some(el) = document.get_element_by_id("volume-slider") {
        if let Ok(input) = el.dyn_into::<web::HtmlInputElement>() {
            input.set_value(&format!("{:.2}", player.volume()));
        }
    }
    if let Some(el) = document.get_element_by_id("player-mute") {
        el.set_inner_html(if player.is_muted() {
            "\u{1F507}"
        } else {
            "\u{1F50A}"
        });
    }
}

/// Push the current bar heights into the equalizer.
pub fn update_player_bars(document: &web::Document, player: &Player) {
    let opacity = if player.is_muted() { 0.3 } else { 1.0 };
    for i in 0..PLAYER_BAR_COUNT {
        if let Some(bar) = document.get_element_by_id(&format!("eq-bar-{i}")) {
            let height = player.bar_height(i) * 100.0;
            _ = bar.set_attribute("style", &format!("height:{height:.0}%;opacity:{opacity}"));
        }
    }
}

fn set_enabled(document: &web::Document, element_id: &str, enabled: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if enabled {
            _ = cl.remove_1("disabled");
        } else {
            _ = cl.add_1("disabled");
        }
    }
}
