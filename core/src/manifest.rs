use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{BatchError, BatchResult};

/// Reads a shader list from a manifest file.
/// One filename per line; blank lines and `#` comments are skipped.
pub fn read_manifest(path: &Path) -> BatchResult<Vec<PathBuf>> {
    let content = fs::read_to_string(path).map_err(|source| BatchError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_manifest(&content))
}

/// Parses manifest content into an ordered shader list.
pub fn parse_manifest(content: &str) -> Vec<PathBuf> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use crate::manifest::parse_manifest;

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let manifest = "\
# deferred pipeline
render_scene.vert
prepare_gbuffer.frag

fullscreen_quad.vert
resolve_gbuffer.vert
resolve_gbuffer.frag

# post processing
ssao.frag
gaussian_blur.comp
";

        let shaders = parse_manifest(manifest);

        let expected = [
            "render_scene.vert",
            "prepare_gbuffer.frag",
            "fullscreen_quad.vert",
            "resolve_gbuffer.vert",
            "resolve_gbuffer.frag",
            "ssao.frag",
            "gaussian_blur.comp",
        ];

        assert!(shaders.iter().map(PathBuf::as_path).eq(expected.map(Path::new)));
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert!(parse_manifest("").is_empty());
        assert!(parse_manifest("# only comments\n\n").is_empty());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let shaders = parse_manifest("  ssao.frag  \n\tgaussian_blur.comp\n");

        assert_eq!(2, shaders.len());
        assert_eq!(Path::new("ssao.frag"), shaders[0]);
        assert_eq!(Path::new("gaussian_blur.comp"), shaders[1]);
    }
}
