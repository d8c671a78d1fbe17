use tera::{Context, Tera};
use tracing::info;

#[derive(Debug)]
pub struct TemplateManager {
    tera: Tera,
}

impl TemplateManager {
    /// Parses every template matching `glob`, failing on the first template that doesn't parse.
    pub fn init(glob: &str) -> Result<Self, tera::Error> {
        info!(
            "{:<20} - Initializing the Template manager",
            "templ manager"
        );
        let tera = Tera::new(glob)?;
        Ok(Self { tera })
    }

    /// A helper function to render a template file from 'html/' directory to String
    pub fn render_html(&self, template_file: &str, ctx: &Context) -> Result<String, tera::Error> {
        let template = format!("html/{template_file}");
        self.tera.render(&template, ctx)
    }

    #[cfg(test)]
    pub fn tera(&self) -> &Tera {
        &self.tera
    }
}
