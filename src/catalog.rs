use std::path::{Path, PathBuf};

// Browse available icons at https://fonts.google.com/icons?icon.platform=web
pub const ICONS: &[(&str, &[&str])] = &[
    ("av", &["play_arrow", "pause", "stop"]),
    ("action", &["drag_indicator"]),
];

// Browse available symbols at https://fonts.google.com/icons
pub const SYMBOLS: &[&str] = &[
    "drag_indicator",
    "file_open",
    "file_save",
    "new_window",
    "piano",
    "play_arrow",
    "stop",
    "view_timeline",
];

pub const ICONS_OUT_DIR: &str = "res/images/md-icons";
pub const SYMBOLS_OUT_DIR: &str = "res/images/md-symbols";

/// A single catalog entry resolved against a base directory: where the SVG
/// lives in the material-design-icons tree and where the PNG goes.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ConversionTask {
    pub source: PathBuf,
    pub output: PathBuf,
}

pub fn icon_tasks(base: &Path) -> Vec<ConversionTask> {
    ICONS
        .iter()
        .flat_map(|(group, names)| {
            names.iter().map(move |name| ConversionTask {
                source: base.join(format!("src/{group}/{name}/materialicons/24px.svg")),
                output: Path::new(ICONS_OUT_DIR).join(format!("{name}.png")),
            })
        })
        .collect()
}

pub fn symbol_tasks(base: &Path) -> Vec<ConversionTask> {
    SYMBOLS
        .iter()
        .map(|name| ConversionTask {
            source: base.join(format!(
                "symbols/web/{name}/materialsymbolssharp/{name}_wght100_24px.svg"
            )),
            output: Path::new(SYMBOLS_OUT_DIR).join(format!("{name}.png")),
        })
        .collect()
}

/// All conversion tasks in catalog order, icons before symbols.
pub fn all_tasks(base: &Path) -> Vec<ConversionTask> {
    let mut tasks = icon_tasks(base);
    tasks.extend(symbol_tasks(base));
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_icon_paths_from_group_and_name() {
        let tasks = icon_tasks(Path::new("/tmp/material-design-icons"));

        assert_eq!(
            tasks[0],
            ConversionTask {
                source: PathBuf::from(
                    "/tmp/material-design-icons/src/av/play_arrow/materialicons/24px.svg"
                ),
                output: PathBuf::from("res/images/md-icons/play_arrow.png"),
            }
        );
    }

    #[test]
    fn should_build_symbol_paths_with_weight_suffix() {
        let tasks = symbol_tasks(Path::new("/tmp/material-design-icons"));

        assert_eq!(
            tasks[0],
            ConversionTask {
                source: PathBuf::from(
                    "/tmp/material-design-icons/symbols/web/drag_indicator/materialsymbolssharp/drag_indicator_wght100_24px.svg"
                ),
                output: PathBuf::from("res/images/md-symbols/drag_indicator.png"),
            }
        );
    }

    #[test]
    fn should_list_every_catalog_entry_with_icons_first() {
        let tasks = all_tasks(Path::new("/base"));

        let icon_count: usize = ICONS.iter().map(|(_, names)| names.len()).sum();
        assert_eq!(tasks.len(), icon_count + SYMBOLS.len());
        assert!(tasks[..icon_count]
            .iter()
            .all(|t| t.output.starts_with(ICONS_OUT_DIR)));
        assert!(tasks[icon_count..]
            .iter()
            .all(|t| t.output.starts_with(SYMBOLS_OUT_DIR)));
    }

    #[test]
    fn should_keep_catalog_iteration_order() {
        let names: Vec<_> = icon_tasks(Path::new("/base"))
            .into_iter()
            .map(|t| t.output.file_stem().unwrap().to_owned())
            .collect();

        assert_eq!(names, ["play_arrow", "pause", "stop", "drag_indicator"]);
    }
}
