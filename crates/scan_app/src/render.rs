use std::io::{self, Write};

use scan_core::{Phase, WorkflowView, NO_JOBS_TEXT, NO_SKILLS_TEXT};

/// Writes a plain-text rendition of the view.
pub fn render(view: &WorkflowView, out: &mut impl Write) -> io::Result<()> {
    match view.phase {
        Phase::Idle => {}
        Phase::FileSelected => {
            if let Some(name) = &view.selected_file {
                writeln!(out, "Selected {name}")?;
            }
        }
        Phase::Uploading => writeln!(out, "Processing...")?,
        Phase::PaginatingMore => writeln!(out, "Loading...")?,
        Phase::ScanReady | Phase::Failed => {}
    }

    if let Some(error) = &view.error {
        writeln!(out, "Error: {error}")?;
    }

    // Results are only printed once settled, so the listing is not repeated per page.
    if !view.has_result || view.busy {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Your Information")?;
    writeln!(out, "  Email: {}", view.email_text())?;
    writeln!(out, "  Phone: {}", view.phone_text())?;

    writeln!(out)?;
    writeln!(out, "Skills")?;
    if view.skills.is_empty() {
        writeln!(out, "  {NO_SKILLS_TEXT}")?;
    } else {
        writeln!(out, "  {}", view.skills.join(", "))?;
    }

    writeln!(out)?;
    writeln!(out, "Matching Jobs ({})", view.jobs.len())?;
    if view.jobs.is_empty() {
        writeln!(out, "  {NO_JOBS_TEXT}")?;
    }
    for (index, job) in view.jobs.iter().enumerate() {
        writeln!(out, "  {:>3}. {} - {}", index + 1, job.title, job.company)?;
        writeln!(out, "       {}", job.location)?;
        writeln!(out, "       {}", job.url)?;
    }
    if view.can_load_more {
        writeln!(out, "  (more jobs available)")?;
    }
    Ok(())
}
