use tally_core::Annotation;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: MadSkin::default(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions { use_color: true },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        if self.opts.use_color {
            self.print_md(&md);
        } else {
            println!("{}", message);
        }
    }

    /// Applies an annotation sequence back onto the source document.
    ///
    /// One forward pass: the sequence is already non-decreasing in
    /// position, so a cursor into `text` suffices. Highlights restyle the
    /// marked span; labels are spliced in right after their anchor offset.
    /// An annotation that fell outside the text (or behind the cursor) is
    /// dropped rather than panicking, worst case a missing decoration.
    pub fn render_document(&self, text: &str, annotations: &[Annotation]) -> String {
        let mut out = String::with_capacity(text.len() + annotations.len() * 24);
        let mut cursor = 0;
        for annotation in annotations {
            match annotation {
                Annotation::Highlight { range, .. } => {
                    if range.from < cursor || range.to > text.len() || range.from > range.to {
                        continue;
                    }
                    out.push_str(&text[cursor..range.from]);
                    let span = &text[range.from..range.to];
                    if self.opts.use_color {
                        out.push_str(&span.with(Color::Cyan).bold().to_string());
                    } else {
                        out.push_str(span);
                    }
                    cursor = range.to;
                }
                Annotation::Label { position, text: label } => {
                    if *position < cursor || *position > text.len() {
                        continue;
                    }
                    out.push_str(&text[cursor..*position]);
                    if self.opts.use_color {
                        out.push_str(&label.as_str().with(Color::DarkGrey).to_string());
                    } else {
                        out.push_str(label);
                    }
                    cursor = *position;
                }
            }
        }
        out.push_str(&text[cursor..]);
        out
    }
}
