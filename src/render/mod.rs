//! Static HTML rendering of the portfolio page.
//!
//! The page is a single document. Each content section is a `<section>` whose
//! `id` is one of the navigation anchors; the contact panel carries its own
//! `contact` id inside the resume section. The `<html>` class attribute comes
//! from the theme controller's root, and a short inline script repeats the
//! toggle in the browser.

pub mod components;

use crate::domain::model::PortfolioContent;
use crate::domain::ports::DocumentRoot;
use crate::theme::{RootClassList, ThemeController, DARK_MARKER};
use chrono::Datelike;
use components::{
    bullet_list, escape_html, external_link, glass, pill, pills, section_heading,
};
use std::fmt::Write;

const SUN: &str = "☀";
const MOON: &str = "☾";

const STYLESHEET: &str = r#"
:root { --text: #18181b; --muted: #3f3f46; --panel: rgba(255,255,255,0.55); --border: rgba(255,255,255,0.2); --wash-opacity: 0.9; }
html.dark { --text: #f4f4f5; --muted: #d4d4d8; --panel: rgba(24,24,27,0.55); --border: rgba(255,255,255,0.1); --wash-opacity: 0.8; }
body { margin: 0; min-height: 100vh; color: var(--text); font-family: system-ui, sans-serif; }
.backdrop { position: fixed; inset: 0; z-index: -1; opacity: var(--wash-opacity); background: radial-gradient(120% 120% at 0% 0%, #60a5fa 0%, transparent 40%), radial-gradient(120% 120% at 100% 0%, #a78bfa 0%, transparent 40%), radial-gradient(120% 120% at 50% 100%, #22d3ee 0%, transparent 45%); }
.wrap { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }
.glass { border-radius: 1.5rem; border: 1px solid var(--border); background: var(--panel); backdrop-filter: blur(20px) saturate(180%); -webkit-backdrop-filter: blur(20px) saturate(180%); box-shadow: 0 10px 40px rgba(0,0,0,0.2); }
.p-6 { padding: 1.5rem; } .p-10 { padding: 2.5rem; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
.pills { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 0.75rem; }
.pill { padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.75rem; border: 1px solid var(--border); background: var(--panel); }
.heading { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1.5rem; }
.row { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.muted { color: var(--muted); font-size: 0.875rem; }
.dates { font-size: 0.75rem; color: var(--muted); }
.button { display: inline-flex; align-items: center; gap: 0.5rem; border-radius: 1rem; padding: 0.5rem 1rem; color: inherit; text-decoration: none; border: 1px solid var(--border); }
.primary { color: #fff; background: linear-gradient(to top right, #2563eb, #6366f1); }
header { position: sticky; top: 0; z-index: 40; }
nav a { margin-left: 1.5rem; color: inherit; text-decoration: none; }
.dock { position: fixed; bottom: 1.5rem; right: 1.5rem; display: flex; gap: 0.75rem; z-index: 50; }
footer { font-size: 0.75rem; color: var(--muted); }
"#;

const TOGGLE_SCRIPT: &str = r#"
(function () {
  var button = document.querySelector("[data-theme-toggle]");
  if (!button) return;
  function paint() {
    var dark = document.documentElement.classList.contains("dark");
    button.textContent = dark ? button.dataset.sun : button.dataset.moon;
  }
  button.addEventListener("click", function () {
    document.documentElement.classList.toggle("dark");
    paint();
  });
  paint();
})();
"#;

#[derive(Debug, Clone)]
pub struct PageRenderer {
    title: String,
    lang: String,
    year: i32,
}

impl PageRenderer {
    pub fn new(title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lang: lang.into(),
            year: chrono::Local::now().year(),
        }
    }

    /// Fix the footer year instead of reading the clock.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn render(
        &self,
        content: &PortfolioContent,
        theme: &ThemeController<RootClassList>,
    ) -> String {
        let mut out = String::with_capacity(32 * 1024);

        self.document_head(&mut out, theme);
        out.push_str("<body>\n<div class=\"backdrop\" aria-hidden=\"true\"></div>\n");

        self.header(&mut out, content, theme);
        out.push_str("<main>\n");
        hero(&mut out, content);
        experience(&mut out, content);
        projects(&mut out, content);
        about(&mut out, content);
        skills(&mut out, content);
        coursework(&mut out, content);
        education(&mut out, content);
        resume_and_contact(&mut out, content);
        out.push_str("</main>\n");

        dock(&mut out);
        let _ = writeln!(
            out,
            r#"<footer class="wrap">© {} {} · Built with Rust</footer>"#,
            self.year,
            escape_html(&content.profile.name)
        );
        let _ = writeln!(out, "<script>{}</script>", TOGGLE_SCRIPT);
        out.push_str("</body>\n</html>\n");

        tracing::debug!("Rendered page ({} bytes)", out.len());
        out
    }

    fn document_head(&self, out: &mut String, theme: &ThemeController<RootClassList>) {
        out.push_str("<!DOCTYPE html>\n");
        let root = theme.root();
        if root.is_empty() {
            let _ = writeln!(out, r#"<html lang="{}">"#, escape_html(&self.lang));
        } else {
            let _ = writeln!(
                out,
                r#"<html lang="{}" class="{}">"#,
                escape_html(&self.lang),
                escape_html(&root.to_attribute())
            );
        }
        out.push_str("<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(out, "<title>{}</title>", escape_html(&self.title));
        let _ = writeln!(out, "<style>{}</style>", STYLESHEET);
        out.push_str("</head>\n");
    }

    fn header(
        &self,
        out: &mut String,
        content: &PortfolioContent,
        theme: &ThemeController<RootClassList>,
    ) {
        let glyph = if theme.root().has_class(DARK_MARKER) { SUN } else { MOON };
        out.push_str("<header><div class=\"wrap\">");
        glass(out, None, "p-6 row", |out| {
            let _ = write!(
                out,
                r##"<a href="#home"><strong>{}</strong></a>"##,
                escape_html(&content.profile.name)
            );
            out.push_str("<nav>");
            for (anchor, label) in [
                ("experience", "Experience"),
                ("projects", "Projects"),
                ("skills", "Skills"),
                ("education", "Education"),
                ("contact", "Contact"),
            ] {
                let _ = write!(out, r##"<a href="#{}">{}</a>"##, anchor, label);
            }
            out.push_str("</nav>");
            let _ = write!(
                out,
                r#"<button class="button" type="button" aria-label="Toggle theme" data-theme-toggle data-sun="{}" data-moon="{}">{}</button>"#,
                SUN, MOON, glyph
            );
        });
        out.push_str("</div></header>\n");
    }
}

fn hero(out: &mut String, content: &PortfolioContent) {
    let profile = &content.profile;
    out.push_str(r#"<section id="home" class="wrap"><div class="grid">"#);

    glass(out, None, "p-10", |out| {
        let _ = write!(
            out,
            "<h1>{} <span class=\"accent\">{}</span></h1><p>{}</p>",
            escape_html(&profile.headline),
            escape_html(&profile.headline_accent),
            escape_html(&profile.intro)
        );
        external_link(out, &profile.legacy_site_url, "View Legacy Site ↗", "button");
        out.push_str(r##" <a class="button primary" href="#projects">See Projects</a>"##);
    });

    glass(out, None, "p-6", |out| {
        let _ = write!(
            out,
            r#"<p class="muted">☎ {}</p><p class="muted">✉ <a href="mailto:{}">{}</a></p><p class="muted">⌖ {}</p>"#,
            escape_html(&profile.phone),
            escape_html(&profile.email),
            escape_html(&profile.email),
            escape_html(&profile.locations)
        );
        pills(out, &profile.highlights);
        out.push_str("<p>");
        external_link(out, &profile.github_url, "GitHub", "button");
        out.push(' ');
        external_link(out, &profile.linkedin_url, "LinkedIn", "button");
        out.push_str("</p>");
    });

    out.push_str("</div></section>\n");
}

fn experience(out: &mut String, content: &PortfolioContent) {
    out.push_str(r#"<section id="experience" class="wrap">"#);
    section_heading(out, "💼", "Experience");
    out.push_str(r#"<div class="grid">"#);
    for entry in &content.experiences {
        glass(out, None, "p-6", |out| {
            let _ = write!(
                out,
                r#"<div class="row"><div><h3>{}</h3><p class="muted">{} · {}</p></div><span class="dates">{}</span></div>"#,
                escape_html(&entry.role),
                escape_html(&entry.organization),
                escape_html(&entry.location),
                escape_html(&entry.dates)
            );
            bullet_list(out, &entry.bullets);
        });
    }
    out.push_str("</div></section>\n");
}

fn projects(out: &mut String, content: &PortfolioContent) {
    out.push_str(r#"<section id="projects" class="wrap">"#);
    section_heading(out, "⌨", "Projects");
    out.push_str(r#"<div class="grid">"#);
    for project in &content.projects {
        glass(out, None, "p-6", |out| {
            out.push_str(r#"<div class="row"><h3>"#);
            match &project.href {
                Some(href) => external_link(out, href, &format!("{} ↗", project.name), ""),
                None => out.push_str(&escape_html(&project.name)),
            }
            let _ = write!(
                out,
                r#"</h3><span class="dates">{}</span></div><p class="muted">{}</p>"#,
                escape_html(&project.dates),
                escape_html(&project.summary)
            );
            pills(out, &project.tags);
        });
    }
    out.push_str("</div></section>\n");
}

fn about(out: &mut String, content: &PortfolioContent) {
    out.push_str(r#"<section id="about" class="wrap">"#);
    glass(out, None, "p-6", |out| {
        let _ = write!(
            out,
            r#"<h2>About Me</h2><p class="muted">{}</p>"#,
            escape_html(&content.profile.about)
        );
    });
    out.push_str("</section>\n");
}

fn skills(out: &mut String, content: &PortfolioContent) {
    out.push_str(r#"<section id="skills" class="wrap">"#);
    section_heading(out, "⌨", "Technical Skills");
    out.push_str(r#"<div class="grid">"#);
    for group in &content.skills {
        glass(out, None, "p-6", |out| {
            let _ = write!(out, "<h3>{}</h3>", escape_html(&group.label));
            out.push_str(r#"<div class="pills">"#);
            for skill in &group.skills {
                pill(out, skill);
            }
            out.push_str("</div>");
        });
    }
    out.push_str("</div></section>\n");
}

fn coursework(out: &mut String, content: &PortfolioContent) {
    out.push_str(r#"<section id="coursework" class="wrap">"#);
    glass(out, None, "p-6", |out| {
        out.push_str(r#"<h2>Relevant Coursework</h2><div class="grid">"#);
        for group in &content.coursework {
            let _ = write!(out, "<div><h3>{}</h3>", escape_html(&group.label));
            bullet_list(out, &group.courses);
            out.push_str("</div>");
        }
        out.push_str("</div>");
    });
    out.push_str("</section>\n");
}

fn education(out: &mut String, content: &PortfolioContent) {
    out.push_str(r#"<section id="education" class="wrap">"#);
    section_heading(out, "🎓", "Education");
    out.push_str(r#"<div class="grid">"#);
    for entry in &content.education {
        glass(out, None, "p-6", |out| {
            let _ = write!(
                out,
                r#"<div class="row"><div><h3>{}</h3><p class="muted">{}</p></div><span class="dates">{}</span></div><p class="muted">GPA: {} · {}</p>"#,
                escape_html(&entry.school),
                escape_html(&entry.degree),
                escape_html(&entry.dates),
                escape_html(&entry.gpa),
                escape_html(&entry.location)
            );
        });
    }
    out.push_str("</div></section>\n");
}

fn resume_and_contact(out: &mut String, content: &PortfolioContent) {
    let profile = &content.profile;
    out.push_str(r#"<section id="resume" class="wrap"><div class="grid">"#);

    glass(out, None, "p-6", |out| {
        section_heading(out, "⤓", "Resume");
        let _ = write!(
            out,
            r#"<p class="muted">Grab a PDF copy of my latest resume.</p><a class="button primary" href="{}" download>Download PDF</a>"#,
            escape_html(&profile.resume_path)
        );
    });

    glass(out, Some("contact"), "p-6", |out| {
        section_heading(out, "✉", "Contact");
        let _ = write!(
            out,
            r#"<p><a href="mailto:{}">{}</a></p><p>☎ {}</p><p>"#,
            escape_html(&profile.email),
            escape_html(&profile.email),
            escape_html(&profile.phone)
        );
        external_link(out, &profile.legacy_site_url, "Portfolio (GitHub Pages)", "");
        out.push_str("</p>");
    });

    out.push_str("</div></section>\n");
}

fn dock(out: &mut String) {
    out.push_str(
        r##"<div class="dock"><a class="button primary" href="#resume">Resume</a><a class="button glass" href="#contact">Contact</a></div>"##,
    );
    out.push('\n');
}
