use leptos::*;
use site_shell::{Section, Theme};

/// Shared UI state: theme palette and the nav section currently in view.
/// None of it survives a reload on purpose.
#[derive(Clone, Copy)]
pub struct AppCtx {
    pub theme: RwSignal<Theme>,
    pub active_section: RwSignal<Section>,
}

pub fn provide_app_ctx() -> AppCtx {
    let ctx = AppCtx {
        theme: create_rw_signal(Theme::default()),
        active_section: create_rw_signal(Section::default()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_app_ctx() -> AppCtx {
    use_context::<AppCtx>().expect("AppCtx not provided")
}
