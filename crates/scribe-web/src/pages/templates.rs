//! Embedded page templates.

use anyhow::Context;
use tera::Tera;

const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("research.html", include_str!("../../templates/research.html")),
    ("writing.html", include_str!("../../templates/writing.html")),
    ("branding.html", include_str!("../../templates/branding.html")),
];

/// Compile all page templates.
pub fn load() -> anyhow::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.to_vec())
        .context("Failed to compile page templates")?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_compile() {
        let tera = load().unwrap();
        let names: Vec<_> = tera.get_template_names().collect();
        assert_eq!(names.len(), TEMPLATES.len());
    }
}
