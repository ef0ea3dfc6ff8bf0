// ============================================================
// Layer 6 — HTML Renderer
// ============================================================
// Produces one self-contained page: a scrolling list of cards.
//
// Each card carries its worked answer inside a hidden <div>.
// The "Reveal Answer" button un-hides it and disables itself,
// so a revealed answer cannot be hidden again.
//
// Markup classes:
//   card      — one question
//   formula   — f(x, y) and ∇f(x, y) lines
//   colvec    — a column vector, one <span class="row"> per entry
//   params    — learning rate and starting point
//   controls  — the reveal button
//   answer    — the worked step ("hidden" until revealed)
//   code      — monospace numbers

use crate::domain::card::Card;
use crate::domain::traits::Renderer;
use crate::engine::format::format_number;
use crate::render::derive;

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; color: #0b213f; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1rem; }
.formula { margin: 0.5rem 0; }
.colvec { display: inline-flex; flex-direction: column; vertical-align: middle; \
border-left: 2px solid; border-right: 2px solid; padding: 0 0.4rem; text-align: right; }
.code { font-family: ui-monospace, monospace; }
.hidden { display: none; }
button.primary { background: #0b213f; color: white; border: 0; border-radius: 4px; padding: 0.4rem 0.9rem; }
button:disabled { opacity: 0.5; }
";

const REVEAL_ONCLICK: &str =
    "this.parentElement.nextElementSibling.classList.remove('hidden');this.disabled=true";

/// Escape text for use inside HTML elements and attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c    => out.push(c),
        }
    }
    out
}

fn col_vec(a: &str, b: &str) -> String {
    format!(
        "<span class=\"colvec\"><span class=\"row\">{}</span><span class=\"row\">{}</span></span>",
        escape(a),
        escape(b),
    )
}

/// Renders cards as HTML sections inside a full page.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Inner HTML of a card's answer block
    pub fn render_answer(&self, card: &Card) -> String {
        let d = derive(card);
        let mut out = String::new();
        out.push_str(&format!(
            "<div>{} = {}</div>\n",
            escape(&d.gradient_head()),
            col_vec(&d.gx, &d.gy),
        ));
        out.push_str(&format!(
            "<div>(x₁, y₁) = {} − {} · {}</div>\n",
            col_vec(&d.start_x, &d.start_y),
            escape(&d.alpha),
            col_vec(&d.gx, &d.gy),
        ));
        out.push_str(&format!(
            "<div>So, x₁ = {} − {}·{} = <strong>{}</strong></div>\n",
            escape(&d.start_x), escape(&d.alpha), escape(&d.gx), escape(&d.next_x),
        ));
        out.push_str(&format!(
            "<div>and y₁ = {} − {}·{} = <strong>{}</strong></div>\n",
            escape(&d.start_y), escape(&d.alpha), escape(&d.gy), escape(&d.next_y),
        ));
        out.push_str("<hr>\n");
        out.push_str(&format!(
            "<div><strong>Answer:</strong> (x₁, y₁) = (<span class=\"code\">{}</span>, <span class=\"code\">{}</span>)</div>\n",
            escape(&d.next_x),
            escape(&d.next_y),
        ));
        out
    }
}

impl Renderer for HtmlRenderer {
    fn render_card(&self, card: &Card) -> String {
        let q = &card.question;
        let mut out = String::from("<section class=\"card\">\n");

        out.push_str(&format!("<h3>Question {}</h3>\n", card.number));
        out.push_str(&format!("<div class=\"formula\">{}</div>\n", escape(q.function_label)));
        out.push_str(&format!(
            "<div class=\"formula\">∇f(x, y) = {}</div>\n",
            col_vec(q.gradient_label_x, q.gradient_label_y),
        ));
        out.push_str(&format!(
            "<div class=\"params\">\n<p>Learning rate: <span class=\"code\">α = {}</span></p>\n<p>Starting point: {}</p>\n</div>\n",
            escape(&format_number(q.learning_rate)),
            col_vec(&format_number(q.start_x), &format_number(q.start_y)),
        ));

        let answer_class = if card.is_revealed() {
            "answer"
        } else {
            out.push_str(&format!(
                "<div class=\"controls\"><button class=\"primary reveal\" onclick=\"{REVEAL_ONCLICK}\">Reveal Answer</button></div>\n"
            ));
            "answer hidden"
        };

        out.push_str(&format!(
            "<div class=\"{answer_class}\">\n{}</div>\n",
            self.render_answer(card)
        ));
        out.push_str("</section>\n");
        out
    }

    fn render_sheet(&self, cards: &[Card]) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<title>Gradient Descent Practice</title>\n");
        out.push_str(&format!("<style>\n{STYLE}</style>\n"));
        out.push_str("</head>\n<body>\n<h1>Gradient Descent Practice</h1>\n");
        out.push_str("<p>Take one gradient-descent step from the starting point: (x₁, y₁) = (x₀, y₀) − α · ∇f(x₀, y₀).</p>\n");
        out.push_str("<div id=\"questions\">\n");
        for card in cards {
            out.push_str(&self.render_card(card));
        }
        out.push_str("</div>\n</body>\n</html>\n");
        out
    }
}
