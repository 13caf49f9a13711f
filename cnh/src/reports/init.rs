//! Next steps printed after `init`.

use cnh_core::PackageManager;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InitReport {
    pub project_name: String,
    pub package_manager: PackageManager,
    /// Features that were set up on top of the starter.
    pub features: Vec<&'static str>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.success("Project setup complete!");
        if !self.features.is_empty() {
            out.key_value("Features", &self.features.join(", "));
        }
        out.newline();
        out.section("Next steps:");
        out.command(&format!("cd {}", self.project_name));
        out.command(&self.package_manager.run_script_command("dev"));
        out.newline();
    }
}
