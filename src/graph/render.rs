//! text rendering for matrices, lists and traversal results
//!
//! Everything here is pure formatting: functions take engine output and
//! return a `String` for the caller to print.

use itertools::Itertools;

use crate::graph::compare::VariantReport;
use crate::graph::Traversal;

/// Renders a labeled matrix as an indexed table.
///
/// Column widths adapt to the widest cell. An empty or ragged matrix is
/// reported as text rather than an error.
pub fn render_matrix(rows: &[Vec<i32>], label: &str) -> String {
    let cols = rows.first().map(|r| r.len()).unwrap_or(0);
    if cols == 0 || rows.iter().any(|r| r.len() != cols) {
        return "Invalid matrix parameters\n".to_string();
    }

    let cell_width = rows
        .iter()
        .flatten()
        .map(|cell| cell.to_string().len())
        .max()
        .unwrap_or(1)
        .max(2);
    let index_width = (rows.len() - 1).to_string().len();

    let mut out = format!("{}:\n", label);

    // column header
    out.push_str(&" ".repeat(index_width + 2));
    for j in 0..cols {
        out.push_str(&format!("{:>width$}", j, width = cell_width + 1));
    }
    out.push('\n');

    // separator
    out.push_str(&" ".repeat(index_width + 2));
    out.push('+');
    out.push_str(&"-".repeat(cols * (cell_width + 1)));
    out.push('\n');

    for (i, row) in rows.iter().enumerate() {
        out.push_str(&format!("{:>width$} |", i, width = index_width));
        for cell in row {
            out.push_str(&format!("{:>width$}", cell, width = cell_width + 1));
        }
        out.push('\n');
    }

    out
}

/// Renders adjacency lists as one `vertex: neighbors` line per vertex.
pub fn render_adjacency_list(lists: &[Vec<usize>], label: &str) -> String {
    let mut out = format!("{}:\n", label);
    for (i, neighbors) in lists.iter().enumerate() {
        out.push_str(&format!("{}: {}\n", i, neighbors.iter().join(" ")));
    }
    out
}

/// Renders a distance vector on a single line, `-1` marking unreached
/// vertices.
pub fn render_distances(distances: &[i32]) -> String {
    format!("Distances vector:\n{}\n", distances.iter().join(" "))
}

/// Renders a timed traversal: visitation order, distances, elapsed time.
pub fn render_traversal(traversal: &Traversal) -> String {
    format!(
        "Vertex traversal order:\n{}\n{}Time: {} us\n",
        traversal.order.iter().join(" "),
        render_distances(&traversal.distances),
        traversal.elapsed_micros()
    )
}

/// Renders one comparison report: timing header plus the full source-by-
/// vertex distance matrix.
pub fn render_report(report: &VariantReport) -> String {
    format!(
        "{}: {} us = {} s\n{}",
        report.variant.label(),
        report.elapsed_micros(),
        report.elapsed_seconds(),
        render_matrix(&report.distances, "Distance matrix")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_matrix_is_reported_as_invalid() {
        assert_eq!(render_matrix(&[], "M"), "Invalid matrix parameters\n");
        assert_eq!(render_matrix(&[vec![]], "M"), "Invalid matrix parameters\n");
    }

    #[test]
    fn ragged_matrix_is_reported_as_invalid() {
        let rows = vec![vec![1, 2], vec![3]];
        assert_eq!(render_matrix(&rows, "M"), "Invalid matrix parameters\n");
    }

    #[test]
    fn matrix_rows_are_indexed_and_aligned() {
        let rows = vec![vec![0, -1], vec![10, 1]];
        let out = render_matrix(&rows, "Distances");
        assert!(out.starts_with("Distances:\n"));
        assert!(out.contains("0 |"), "missing indexed row border:\n{}", out);
        assert!(out.contains("-1"), "cells must render verbatim:\n{}", out);
        // all data lines share one width
        let lines: Vec<&str> = out.lines().skip(3).collect();
        assert!(lines.windows(2).all(|w| w[0].len() == w[1].len()));
    }

    #[test]
    fn adjacency_list_lines_one_vertex_each() {
        let lists = vec![vec![1, 2], vec![0], vec![0]];
        let out = render_adjacency_list(&lists, "Adjacency List");
        assert_eq!(out, "Adjacency List:\n0: 1 2\n1: 0\n2: 0\n");
    }

    #[test]
    fn distances_render_on_one_line() {
        assert_eq!(
            render_distances(&[0, 1, -1]),
            "Distances vector:\n0 1 -1\n"
        );
    }
}
