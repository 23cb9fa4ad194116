use dioxus::prelude::*;

use crate::domain::services::SubmenuAnimator;

/// Delay between two animation frames
#[cfg(target_arch = "wasm32")]
const FRAME_INTERVAL_MS: u32 = 16;

/// Height of one submenu panel, driven by [`SubmenuAnimator`]
#[derive(Clone, Copy)]
pub struct UseSubmenuHeightReturn {
    pub rendered_height: Signal<f64>,
    animator: Signal<SubmenuAnimator>,
    generation: Signal<u64>,
}

impl UseSubmenuHeightReturn {
    pub fn set_expanded(&self, expanded: bool) {
        let mut animator = self.animator;
        let started = animator.write().set_expanded(expanded, now_ms());
        self.after_change(started);
    }

    /// Feed a new measurement of the unconstrained content height
    pub fn measure(&self, content_height: f64) {
        let mut animator = self.animator;
        let started = animator.write().set_content_height(content_height, now_ms());
        self.after_change(started);
    }

    /// CSS height. `auto` until the content has been measured once, so
    /// server-rendered open panels are not drawn collapsed.
    pub fn css_height(&self) -> String {
        let animator = self.animator.read();
        if animator.is_expanded() && !animator.is_measured() {
            "auto".to_string()
        } else {
            format!("{}px", (self.rendered_height)())
        }
    }

    fn after_change(&self, started: bool) {
        if started {
            self.animate();
            return;
        }

        let now = now_ms();
        let animator = self.animator.peek();
        if animator.is_settled(now) {
            let mut rendered_height = self.rendered_height;
            rendered_height.set(animator.height_at(now));
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn animate(&self) {
        use gloo_timers::future::TimeoutFuture;

        let mut generation = self.generation;
        *generation.write() += 1;
        let current = *generation.peek();

        let animator = self.animator;
        let mut rendered_height = self.rendered_height;

        spawn(async move {
            // A newer transition bumps the generation and takes over
            while *generation.peek() == current {
                let now = now_ms();
                let (height, settled) = {
                    let animator = animator.peek();
                    (animator.height_at(now), animator.is_settled(now))
                };
                rendered_height.set(height);
                if settled {
                    break;
                }
                TimeoutFuture::new(FRAME_INTERVAL_MS).await;
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn animate(&self) {
        // No frames to drive outside the browser
        let mut generation = self.generation;
        *generation.write() += 1;
        let mut rendered_height = self.rendered_height;
        rendered_height.set(self.animator.peek().target_height());
    }
}

pub fn use_submenu_height(expanded: bool) -> UseSubmenuHeightReturn {
    let animator = use_signal(|| SubmenuAnimator::new(expanded));
    let rendered_height = use_signal(|| 0.0);
    let generation = use_signal(|| 0u64);

    let submenu = UseSubmenuHeightReturn {
        rendered_height,
        animator,
        generation,
    };

    use_effect(use_reactive((&expanded,), move |(expanded,)| {
        submenu.set_expanded(expanded);
    }));

    submenu
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}
