use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn front_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).card_front
    }

    pub fn back_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).card_back
    }

    pub fn card_stroke(&self, ctx: &egui::Context, flipped: bool) -> Stroke {
        let details = self.details(ctx);
        Stroke::new(2.0, if flipped { details.orange } else { details.purple })
    }

    pub fn face_label(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).small().color(self.details(ctx).comment)
    }

    pub fn caption(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(28.0).strong().color(self.details(ctx).foreground)
    }

    pub fn meaning(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(28.0).color(self.details(ctx).orange)
    }

    pub fn indicator(&self, ctx: &egui::Context, content: &str, reversed: bool) -> RichText {
        let details = self.details(ctx);
        RichText::new(content).monospace().color(if reversed { details.pink } else { details.cyan })
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    purple: Color32,
    cyan: Color32,
    pink: Color32,
    card_front: Color32,
    card_back: Color32,
    background_dark: Color32,
}

impl ThemeDetails {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            pink: Color32::from_rgb(255, 121, 198),
            card_front: Color32::from_rgb(52, 54, 66),
            card_back: Color32::from_rgb(66, 56, 70),
            background_dark: Color32::from_rgb(33, 35, 53),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            comment: Color32::from_rgb(120, 130, 160),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            pink: Color32::from_rgb(230, 130, 200),
            card_front: Color32::from_rgb(255, 255, 250),
            card_back: Color32::from_rgb(250, 240, 232),
            background_dark: Color32::from_rgb(245, 245, 240),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let mut visuals = Visuals {
        dark_mode: is_dark,
        hyperlink_color: theme.cyan,
        error_fg_color: theme.red,
        warn_fg_color: theme.orange,
        window_fill: theme.background,
        panel_fill: theme.background_dark,
        ..default
    };
    visuals.selection.bg_fill = theme.selection;
    visuals.widgets.noninteractive.fg_stroke.color = theme.foreground;
    visuals.widgets.inactive.fg_stroke.color = theme.foreground;
    visuals.widgets.hovered.bg_stroke.color = theme.cyan;
    visuals.widgets.active.bg_stroke.color = theme.cyan;

    ctx.set_visuals_of(variant, visuals);
}
