// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Catalog refresh command. The host answers with an ordered sequence of
/// `(name, value)` pairs, or `null` when no session is attached.
pub const PROPS_COMMAND: &str = "get_props_for_variable_explorer()";

/// Detail fetch command for one name path. The path is rendered as a
/// tuple literal because that is what the host's evaluator parses.
pub fn meta_command(path: &[String]) -> String {
    format!("get_meta_dict({})", tuple_literal(path))
}

fn tuple_literal(path: &[String]) -> String {
    let mut out = String::from("(");
    for (index, segment) in path.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push('\'');
        for ch in segment.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '\'' => out.push_str("\\'"),
                other => out.push(other),
            }
        }
        out.push('\'');
    }
    // A one-element tuple needs the trailing comma to stay a tuple.
    if path.len() == 1 {
        out.push(',');
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::meta_command;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|segment| (*segment).to_owned()).collect()
    }

    #[test]
    fn single_segment_path_keeps_the_trailing_comma() {
        assert_eq!(meta_command(&path(&["df"])), "get_meta_dict(('df',))");
    }

    #[test]
    fn nested_path_renders_comma_separated() {
        assert_eq!(
            meta_command(&path(&["outer", "inner"])),
            "get_meta_dict(('outer', 'inner'))"
        );
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(
            meta_command(&path(&["it's"])),
            "get_meta_dict(('it\\'s',))"
        );
        assert_eq!(
            meta_command(&path(&["a\\b"])),
            "get_meta_dict(('a\\\\b',))"
        );
    }

    #[test]
    fn empty_path_is_the_empty_tuple() {
        assert_eq!(meta_command(&[]), "get_meta_dict(())");
    }
}
