// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Renders rows as space-aligned columns under a header line.
pub fn render_aligned(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "(no variables)\n".to_owned();
    }

    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            let width = cell.chars().count();
            if width > widths[index] {
                widths[index] = width;
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers.iter().copied(), &widths);
    for row in rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a, I>(out: &mut String, cells: I, widths: &[usize])
where
    I: IntoIterator<Item = &'a str>,
{
    let mut line = String::new();
    for (index, cell) in cells.into_iter().enumerate() {
        line.push_str(cell);
        let width = cell.chars().count();
        let pad = widths[index].saturating_sub(width) + 2;
        line.extend(std::iter::repeat_n(' ', pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
