use crate::state::{provide_app_ctx, use_app_ctx};
use crate::theme::GLOBAL_CSS;
use leptos::*;
use leptos_meta::*;
use site_shell::{site_content, PastRole, Section, Theme};

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use neon_cursor::NeonCursor;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Host element the cursor overlay mounts its canvas into.
const CURSOR_ROOT_ID: &str = "neon-cursor-root";

#[cfg(target_arch = "wasm32")]
fn viewport_is_mobile(win: &web_sys::Window) -> bool {
    if let Ok(Some(mq)) = win.match_media(site_shell::MOBILE_MEDIA_QUERY) {
        return mq.matches();
    }
    win.inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(site_shell::is_mobile_width)
        .unwrap_or(false)
}

/// Smooth-scroll to a section anchor. Falls back to the top of the page if
/// the work anchor has not been attached yet.
fn scroll_to_section(section: Section) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(win) = window() else {
            return;
        };
        let Some(doc) = win.document() else {
            return;
        };
        if let Some(el) = doc.get_element_by_id(section.anchor_id()) {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        } else if section == Section::Work {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = section;
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_app_ctx();

    let (is_mobile, set_is_mobile) = create_signal(false);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = &set_is_mobile;

    #[cfg(target_arch = "wasm32")]
    {
        // Evaluate the gate at mount, then keep it in sync on resize. The
        // listener is removed again when the app unmounts.
        create_effect(move |_| {
            let Some(win) = window() else {
                return;
            };
            set_is_mobile.set(viewport_is_mobile(&win));
            let cb = Rc::new(Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(win) = window() {
                    set_is_mobile.set(viewport_is_mobile(&win));
                }
            })));
            let _ = win
                .add_event_listener_with_callback("resize", cb.as_ref().as_ref().unchecked_ref());
            on_cleanup({
                let cb = cb.clone();
                move || {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "resize",
                            cb.as_ref().as_ref().unchecked_ref(),
                        );
                    }
                }
            });
        });
    }

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Title text="Esther Xin"/>
        {move || {
            if is_mobile.get() {
                view! { <MobileGate/> }.into_view()
            } else {
                view! { <Shell/> }.into_view()
            }
        }}
    }
}

/// Static notice shown below the mobile width threshold instead of the
/// full layout.
#[component]
fn MobileGate() -> impl IntoView {
    view! {
        <div class="mobile-gate">
            <p class="mobile-gate-text">
                "This website is best viewed on desktop. Please visit on a larger screen for the full experience :)"
            </p>
        </div>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let ctx = use_app_ctx();
    let content = site_content();

    #[cfg(target_arch = "wasm32")]
    {
        // Scroll-driven section tracking: once the about anchor's top
        // crosses the viewport midpoint, the about nav entry lights up.
        let active = ctx.active_section;
        create_effect(move |_| {
            let Some(win) = window() else {
                return;
            };
            let cb = Rc::new(Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
                move |_ev: web_sys::Event| {
                    let Some(win) = window() else {
                        return;
                    };
                    let Some(doc) = win.document() else {
                        return;
                    };
                    // Anchors may not be attached yet; silently skip.
                    let Some(anchor) = doc.get_element_by_id(Section::About.anchor_id()) else {
                        return;
                    };
                    let Some(vh) = win.inner_height().ok().and_then(|v| v.as_f64()) else {
                        return;
                    };
                    let next =
                        Section::from_scroll(anchor.get_bounding_client_rect().top(), vh);
                    if active.get_untracked() != next {
                        active.set(next);
                    }
                },
            )));
            let _ = win
                .add_event_listener_with_callback("scroll", cb.as_ref().as_ref().unchecked_ref());
            on_cleanup({
                let cb = cb.clone();
                move || {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            cb.as_ref().as_ref().unchecked_ref(),
                        );
                    }
                }
            });
        });
    }

    let shell_class = move || {
        let theme_class = ctx.theme.get().class_name();
        if theme_class.is_empty() {
            "site-shell".to_string()
        } else {
            format!("site-shell {theme_class}")
        }
    };
    let toggle_theme = move |_| ctx.theme.update(|t| *t = t.toggled());
    // Dark mode offers the sun, light mode the moon.
    let theme_glyph = move || match ctx.theme.get() {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };

    // Nav clicks switch the highlight synchronously, then smooth-scroll.
    let go_to = move |section: Section| {
        ctx.active_section.set(section);
        scroll_to_section(section);
    };

    view! {
        <div class=shell_class>
            <CursorOverlay/>
            <aside class="sidebar">
                <div class="sidebar-inner">
                    <a
                        href="#"
                        class="nav-link"
                        class:active=move || ctx.active_section.get() == Section::Work
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to(Section::Work);
                        }
                    >
                        {Section::Work.nav_label()}
                    </a>
                    <a
                        href="#"
                        class="nav-link"
                        class:active=move || ctx.active_section.get() == Section::About
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to(Section::About);
                        }
                    >
                        {Section::About.nav_label()}
                    </a>
                    <div class="sidebar-divider"></div>
                    <div class="contact-links">
                        {content
                            .contacts
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        class="nav-link"
                                        href=link.href.clone()
                                        target=link.external.then_some("_blank")
                                        rel=link.external.then_some("noopener noreferrer")
                                    >
                                        {link.label.clone()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="sidebar-footer">{content.copyright.clone()}</div>
                </div>
            </aside>

            <section class="content">
                <button class="theme-toggle" aria-label="toggle theme" on:click=toggle_theme>
                    {theme_glyph}
                </button>
                <div id=Section::Work.anchor_id()></div>

                <div class="intro">
                    <h1 class="headline">{content.name.clone()}</h1>
                    <p class="tagline">
                        "a " <strong>"backend engineer"</strong>
                        " based in New York City focusing on "
                        <strong>"infrastructure and systems thinking"</strong>
                        " to create efficient, scalable solutions"
                    </p>
                </div>

                <div class="content-section">
                    <p class="section-label">"current"</p>
                    <p class="role-now">
                        {content.current.title.clone()} " at "
                        <a class="underline-link" href=content.current.company_url.clone()>
                            {content.current.company.clone()}
                        </a>
                    </p>
                </div>

                <div class="content-section past">
                    <p class="section-label">"past"</p>
                    <div class="role-list">
                        {content
                            .past
                            .into_iter()
                            .map(|role| view! { <RoleEntry role/> })
                            .collect_view()}
                    </div>
                </div>

                <div id=Section::About.anchor_id() class="dive-deeper">
                    <h2 class="dive-title">"dive deeper"</h2>
                    <div class="about-row">
                        <img class="avatar" src=content.avatar_src.clone() alt="Profile"/>
                        <div class="about-body">
                            <p class="section-label">"synopsis"</p>
                            <p class="synopsis-text">
                                "Esther Xin is a recent graduate from the University of Waterloo \
                                 with a Bachelor's degree in Systems Design Engineering, where \
                                 she developed a strong foundation in the intersection of \
                                 engineering, product, and design."
                                <br/>
                                <br/>
                                "She is particularly interested in infrastructure, backend \
                                 systems, and building internal tools that enhance developer \
                                 experience and operational efficiency."
                                <br/>
                                <br/>
                                "Originally from Toronto, Canada, Esther recently relocated to \
                                 New York City. Outside of work, she enjoys following European \
                                 football, exploring film, building Legos, solving puzzles, and \
                                 is currently getting into running."
                                <br/>
                                <br/>
                                "Feel free to reach out via email or LinkedIn to connect."
                            </p>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn RoleEntry(role: PastRole) -> impl IntoView {
    view! {
        <div class="role-entry">
            <span class="year-label">{role.years}</span>
            <div class="role-body">
                <p class="role-title">
                    {role.title} " at "
                    <a class="underline-link" href=role.company_url>{role.company}</a>
                </p>
                <p class="role-summary">{role.summary}</p>
                <p class="tools-text">"Tools: " {role.tools}</p>
            </div>
        </div>
    }
}

/// Mounts the decorative cursor trail once its host element is in the DOM
/// and tears it down (listeners, frame loop, canvas) on unmount.
#[component]
fn CursorOverlay() -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    {
        let handle = create_rw_signal::<Option<Rc<NeonCursor>>>(None);
        create_effect(move |_| {
            if handle.get_untracked().is_some() {
                return;
            }
            spawn_local(async move {
                // Yield once so the host div is attached before mounting.
                TimeoutFuture::new(0).await;
                match NeonCursor::mount(CURSOR_ROOT_ID) {
                    Ok(cursor) => handle.set(Some(Rc::new(cursor))),
                    Err(err) => log::warn!("cursor overlay unavailable: {err:?}"),
                }
            });
        });
        on_cleanup(move || {
            if let Some(cursor) = handle.get_untracked() {
                cursor.destroy();
            }
        });
    }

    view! { <div id=CURSOR_ROOT_ID></div> }
}
