//! Decorative floating icons for the home page.
//!
//! The server seeds a random field of icons; the browser animates it one
//! frame at a time (see `ui::components::motion`). [`FloatingIcon::tick`] is
//! the per-frame rule the client script follows.

use rand::seq::SliceRandom;
use rand::Rng;

/// Icons drawn on the home page
pub const HOME_ICON_COUNT: usize = 15;

/// Pointer influence radius in px
pub const POINTER_RADIUS: f64 = 100.0;

/// Scale gained per px the pointer is inside `POINTER_RADIUS`
pub const POINTER_SCALE_STEP: f64 = 0.01;

/// Icon scale for a pointer `distance` px away
pub fn pointer_scale(distance: f64) -> f64 {
    if distance < POINTER_RADIUS {
        1.0 + (POINTER_RADIUS - distance) * POINTER_SCALE_STEP
    } else {
        1.0
    }
}

const ICON_COLORS: [&str; 6] = [
    "#a7f3d0", "#facc15", "#60a5fa", "#d8b4fe", "#f9a8d4", "#6ee7b7",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Cpu,
    Code,
    Zap,
    Rss,
    Github,
    Linkedin,
    X,
}

impl IconKind {
    pub const ALL: [IconKind; 7] = [
        IconKind::Cpu,
        IconKind::Code,
        IconKind::Zap,
        IconKind::Rss,
        IconKind::Github,
        IconKind::Linkedin,
        IconKind::X,
    ];

    /// Text glyph rendered for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Cpu => "\u{2699}",
            IconKind::Code => "</>",
            IconKind::Zap => "\u{26A1}",
            IconKind::Rss => "\u{25C9}",
            IconKind::Github => "\u{2325}",
            IconKind::Linkedin => "in",
            IconKind::X => "\u{1D54F}",
        }
    }
}

/// Size of the animated container in px
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// One icon of the field.
///
/// Seeds carry `x`/`y` as percent of the container (the server doesn't know
/// its size); the client converts them to px before the first frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingIcon {
    pub kind: IconKind,
    pub x: f64,
    pub y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub size: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub scale: f64,
}

impl FloatingIcon {
    /// Random field of `count` icons
    pub fn scatter<R: Rng>(count: usize, rng: &mut R) -> Vec<FloatingIcon> {
        (0..count)
            .map(|_| FloatingIcon {
                kind: *IconKind::ALL.choose(rng).unwrap_or(&IconKind::Cpu),
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                velocity_x: rng.gen_range(1.0..3.0),
                velocity_y: rng.gen_range(1.0..3.0),
                size: rng.gen_range(15.0..35.0),
                color: ICON_COLORS.choose(rng).copied().unwrap_or(ICON_COLORS[0]),
                opacity: rng.gen_range(0.3..0.8),
                scale: 1.0,
            })
            .collect()
    }

    /// Advance one frame (px space).
    ///
    /// Velocity flips when the new position leaves the container; the icon
    /// grows while the pointer is within `POINTER_RADIUS` of its old position.
    pub fn tick(&mut self, bounds: Bounds, pointer: (f64, f64)) {
        let new_x = self.x + self.velocity_x;
        let new_y = self.y + self.velocity_y;

        if new_x > bounds.width || new_x < 0.0 {
            self.velocity_x = -self.velocity_x;
        }
        if new_y > bounds.height || new_y < 0.0 {
            self.velocity_y = -self.velocity_y;
        }

        let distance = ((pointer.0 - self.x).powi(2) + (pointer.1 - self.y).powi(2)).sqrt();
        self.scale = pointer_scale(distance);

        self.x = new_x;
        self.y = new_y;
    }

    /// Inline style for the seed element
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; font-size: {:.0}px; color: {}; opacity: {:.2};",
            self.x, self.y, self.size, self.color, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn icon(x: f64, y: f64, vx: f64, vy: f64) -> FloatingIcon {
        FloatingIcon {
            kind: IconKind::Zap,
            x,
            y,
            velocity_x: vx,
            velocity_y: vy,
            size: 20.0,
            color: ICON_COLORS[0],
            opacity: 0.5,
            scale: 1.0,
        }
    }

    const BOUNDS: Bounds = Bounds {
        width: 200.0,
        height: 100.0,
    };
    const FAR: (f64, f64) = (10_000.0, 10_000.0);

    #[test]
    fn scatter_stays_in_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let icons = FloatingIcon::scatter(HOME_ICON_COUNT, &mut rng);
        assert_eq!(icons.len(), HOME_ICON_COUNT);

        for icon in &icons {
            assert!((0.0..100.0).contains(&icon.x));
            assert!((0.0..100.0).contains(&icon.y));
            assert!((1.0..3.0).contains(&icon.velocity_x));
            assert!((1.0..3.0).contains(&icon.velocity_y));
            assert!((15.0..35.0).contains(&icon.size));
            assert!((0.3..0.8).contains(&icon.opacity));
            assert!(ICON_COLORS.contains(&icon.color));
            assert_eq!(icon.scale, 1.0);
        }
    }

    #[test]
    fn tick_moves_by_velocity() {
        let mut i = icon(50.0, 50.0, 2.0, 1.5);
        i.tick(BOUNDS, FAR);
        assert_eq!((i.x, i.y), (52.0, 51.5));
        assert_eq!((i.velocity_x, i.velocity_y), (2.0, 1.5));
        assert_eq!(i.scale, 1.0);
    }

    #[test]
    fn tick_reflects_at_edges() {
        let mut i = icon(199.0, 99.5, 2.0, 1.0);
        i.tick(BOUNDS, FAR);
        assert_eq!(i.velocity_x, -2.0);
        assert_eq!(i.velocity_y, -1.0);

        let mut i = icon(0.5, 10.0, -1.0, 1.0);
        i.tick(BOUNDS, FAR);
        assert_eq!(i.velocity_x, 1.0);
        assert_eq!(i.velocity_y, 1.0);
    }

    #[test]
    fn tick_scales_near_pointer() {
        let mut i = icon(50.0, 50.0, 1.0, 1.0);
        i.tick(BOUNDS, (50.0, 50.0));
        assert!((i.scale - 2.0).abs() < 1e-9);

        let mut i = icon(50.0, 50.0, 1.0, 1.0);
        i.tick(BOUNDS, (110.0, 50.0));
        assert!((i.scale - 1.4).abs() < 1e-9);

        let mut i = icon(50.0, 50.0, 1.0, 1.0);
        i.tick(BOUNDS, (150.0, 50.0));
        assert_eq!(i.scale, 1.0);
    }

    #[test]
    fn pointer_scale_edges() {
        assert_eq!(pointer_scale(0.0), 1.0 + POINTER_RADIUS * POINTER_SCALE_STEP);
        assert_eq!(pointer_scale(POINTER_RADIUS), 1.0);
        assert_eq!(pointer_scale(POINTER_RADIUS * 3.0), 1.0);
    }

    #[test]
    fn style_uses_percent_position() {
        let i = icon(12.5, 40.0, 1.0, 1.0);
        assert_eq!(
            i.style(),
            "left: 12.50%; top: 40.00%; font-size: 20px; color: #a7f3d0; opacity: 0.50;"
        );
    }
}
