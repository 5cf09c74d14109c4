//! Decorative motion: floating icon field and letter-by-letter title reveal.
//!
//! Both are seeded in the markup and animated by small inline scripts that
//! schedule every frame and timer through `blogTasks`, so leaving the page
//! cancels everything still pending.

use dioxus::prelude::*;

use crate::motion::{FloatingIcon, POINTER_RADIUS, POINTER_SCALE_STEP};

/// Scheduled-task helper shared by the motion scripts.
///
/// `blogTasks.frame(fn)` and `blogTasks.after(ms, fn)` return a cancel
/// function. Live handles are cancelled on `pagehide`.
pub const TASKS_SCRIPT: &str = r#"
window.blogTasks = (function(){
    const live = new Set();
    function cancel(h) {
        if (!live.delete(h)) return;
        if (h.kind === 'frame') cancelAnimationFrame(h.id); else clearTimeout(h.id);
    }
    function frame(fn) {
        const h = { kind: 'frame' };
        h.id = requestAnimationFrame(t => { live.delete(h); fn(t); });
        live.add(h);
        return () => cancel(h);
    }
    function after(ms, fn) {
        const h = { kind: 'timer' };
        h.id = setTimeout(() => { live.delete(h); fn(); }, ms);
        live.add(h);
        return () => cancel(h);
    }
    function cancelAll() { Array.from(live).forEach(cancel); }
    window.addEventListener('pagehide', cancelAll);
    return { frame, after, cancelAll };
})();
"#;

/// Per-frame icon motion. Mirrors `FloatingIcon::tick`; the pointer radius and
/// scale step come from the field's `data-radius` / `data-scale-step`.
pub const MOTION_SCRIPT: &str = r#"
(function(){
    const field = document.querySelector('[data-floating-icons]');
    if (!field) return;
    const radius = parseFloat(field.dataset.radius);
    const scaleStep = parseFloat(field.dataset.scaleStep);
    const far = { x: -1e4, y: -1e4 };
    let pointer = far;
    window.addEventListener('mousemove', e => {
        const r = field.getBoundingClientRect();
        pointer = { x: e.clientX - r.left, y: e.clientY - r.top };
    });
    document.addEventListener('mouseleave', () => { pointer = far; });

    const w0 = field.clientWidth, h0 = field.clientHeight;
    const icons = Array.from(field.querySelectorAll('[data-vx]')).map(el => ({
        el,
        x: parseFloat(el.style.left) / 100 * w0,
        y: parseFloat(el.style.top) / 100 * h0,
        vx: parseFloat(el.dataset.vx),
        vy: parseFloat(el.dataset.vy),
    }));

    function step() {
        const w = field.clientWidth, h = field.clientHeight;
        for (const i of icons) {
            const nx = i.x + i.vx, ny = i.y + i.vy;
            if (nx > w || nx < 0) i.vx = -i.vx;
            if (ny > h || ny < 0) i.vy = -i.vy;
            const d = Math.hypot(pointer.x - i.x, pointer.y - i.y);
            const scale = d < radius ? 1 + (radius - d) * scaleStep : 1;
            i.x = nx;
            i.y = ny;
            i.el.style.left = i.x + 'px';
            i.el.style.top = i.y + 'px';
            i.el.style.transform = 'scale(' + scale + ')';
        }
        blogTasks.frame(step);
    }
    blogTasks.frame(step);
})();
"#;

/// Letter-by-letter reveal for `[data-reveal]` headings.
pub const REVEAL_SCRIPT: &str = r#"
(function(){
    document.querySelectorAll('[data-reveal]').forEach(el => {
        const letters = Array.from(el.dataset.reveal || '');
        const speed = parseInt(el.dataset.speed, 10) || 80;
        const out = el.querySelector('.reveal-text');
        if (!out) return;
        let shown = 0;
        out.textContent = '';
        el.classList.add('typing');
        function next() {
            if (shown >= letters.length) {
                el.classList.remove('typing');
                return;
            }
            shown += 1;
            out.textContent = letters.slice(0, shown).join('');
            blogTasks.after(speed, next);
        }
        blogTasks.after(speed, next);
    });
})();
"#;

/// Scripts a page with motion needs, in load order
pub fn motion_scripts() -> String {
    [TASKS_SCRIPT, MOTION_SCRIPT, REVEAL_SCRIPT].concat()
}

/// Absolutely positioned icon field covering its parent.
#[component]
pub fn FloatingIcons(icons: Vec<FloatingIcon>) -> Element {
    let seeds: Vec<(String, String, String, &'static str)> = icons
        .iter()
        .map(|icon| {
            (
                icon.style(),
                format!("{:.3}", icon.velocity_x),
                format!("{:.3}", icon.velocity_y),
                icon.kind.glyph(),
            )
        })
        .collect();

    rsx! {
        div {
            class: "floating-icons",
            "data-floating-icons": "true",
            "data-radius": "{POINTER_RADIUS}",
            "data-scale-step": "{POINTER_SCALE_STEP}",
            aria_hidden: "true",
            for (idx, (style, vx, vy, glyph)) in seeds.into_iter().enumerate() {
                span {
                    key: "{idx}",
                    class: "floating-icon",
                    style: "{style}",
                    "data-vx": "{vx}",
                    "data-vy": "{vy}",
                    "{glyph}"
                }
            }
        }
    }
}

/// Heading whose text is typed out by `REVEAL_SCRIPT`.
///
/// The full text is rendered server-side so it reads correctly without scripts.
#[component]
pub fn RevealTitle(text: String, #[props(default = 80)] speed: u32) -> Element {
    rsx! {
        h1 {
            class: "reveal",
            "data-reveal": "{text}",
            "data-speed": "{speed}",
            span { class: "reveal-text", "{text}" }
            span { class: "reveal-cursor", aria_hidden: "true" }
        }
    }
}
