//! Plain ASCII tables with the title embedded in the top border.

fn width(cell: &str) -> usize {
    cell.chars().count()
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (index, column_width) in widths.iter().enumerate() {
        let cell = cells.get(index).map(|cell| cell.as_ref()).unwrap_or("");
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(column_width - width(cell) + 1));
        line.push('|');
    }
    line
}

/// Renders `header` and `rows` as a boxed table.
///
/// The title replaces the start of the top border when it fits inside it and
/// is dropped otherwise. Rows shorter than the header are padded with blanks.
pub fn render_table<S: AsRef<str>>(title: &str, header: &[&str], rows: &[Vec<S>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|cell| width(cell)).collect();
    for cells in rows {
        for (index, cell) in cells.iter().enumerate().take(widths.len()) {
            widths[index] = widths[index].max(width(cell.as_ref()));
        }
    }

    let separator = border(&widths);
    let separator_len = width(&separator);
    let top = if !title.is_empty() && width(title) + 2 <= separator_len {
        let tail: String = separator.chars().skip(width(title) + 1).collect();
        format!("+{title}{tail}")
    } else {
        separator.clone()
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(top);
    lines.push(row(header, &widths));
    lines.push(separator.clone());
    for cells in rows {
        lines.push(row(cells, &widths));
    }
    lines.push(separator);

    lines.join("\n")
}
