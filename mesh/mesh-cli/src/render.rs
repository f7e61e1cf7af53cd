//! Human-readable report rendering.

use std::fmt;

use mesh_analyze::AnalysisReport;

/// Plain-text view of an [`AnalysisReport`].
pub struct Text<'a>(pub &'a AnalysisReport);

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "== {} ==", report.file_name.as_deref().unwrap_or("<stdin>"))?;

        if let (Some(err), Some(kind)) = (&report.error, report.error_kind) {
            writeln!(f, "  Error ({kind}): {err}")?;
        }

        if let Some(encoding) = report.encoding {
            match &report.label {
                Some(label) => writeln!(f, "Encoding: {encoding} ({label})")?,
                None => writeln!(f, "Encoding: {encoding}")?,
            }
        }
        if report.decode.truncated {
            writeln!(
                f,
                "Warning: file is truncated, header declares {} triangles",
                report.decode.declared_triangles.unwrap_or_default()
            )?;
        }
        if report.decode.skipped_blocks > 0 {
            writeln!(
                f,
                "Warning: skipped {} malformed facet blocks",
                report.decode.skipped_blocks
            )?;
        }

        write!(f, "{}", report.metrics)?;

        if let Some(scale) = &report.scale {
            writeln!(f, "Scale (model height {:.1} mm):", scale.model_height_mm)?;
            if let Some(best) = &scale.best_match {
                writeln!(
                    f,
                    "  Closest: {} ({:.1} cm / {:.1} in, off by {:.1} mm)",
                    best.entry.label, best.height_cm, best.height_in, best.difference_mm
                )?;
            }
            let within: Vec<_> = scale.within_tolerance().map(|m| m.entry.label).collect();
            if within.is_empty() {
                writeln!(f, "  Within tolerance: none")?;
            } else {
                writeln!(f, "  Within tolerance: {}", within.join(", "))?;
            }
        }

        writeln!(f)
    }
}
