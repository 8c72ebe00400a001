//! Generated-code detection.
//!
//! Findings in generated files are noise: nobody can act on them without
//! changing the generator. A file counts as generated when its name follows
//! a well-known generator naming pattern or its header carries an
//! auto-generated marker.

const GENERATED_SUFFIXES: &[&str] = &[".designer.cs", ".generated.cs", ".g.cs", ".g.i.cs"];

const GENERATED_PREFIXES: &[&str] = &["temporarygeneratedfile_"];

const GENERATED_MARKERS: &[&str] = &["<auto-generated", "<autogenerated"];

/// Whether a file with this path and leading text holds generated code.
pub fn is_generated_file(path: &str, header: Option<&str>) -> bool {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let lowered = file_name.to_ascii_lowercase();

    if GENERATED_SUFFIXES
        .iter()
        .any(|suffix| lowered.ends_with(suffix))
    {
        return true;
    }

    if GENERATED_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
    {
        return true;
    }

    header.is_some_and(|text| {
        let text = text.to_ascii_lowercase();
        GENERATED_MARKERS.iter().any(|marker| text.contains(marker))
    })
}

#[cfg(test)]
#[path = "../tests/generated_code_tests.rs"]
mod tests;
