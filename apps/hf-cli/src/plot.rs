//! Gnuplot hand-off for solved temperature grids.
//!
//! The plots read the run's flat-text grid file; gnuplot runs as an
//! external process and its absence is the caller's to report, never a
//! solve failure.

use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

pub fn plot_heatmap(data_path: &Path) -> io::Result<()> {
    run_gnuplot(&[
        "set title 'Temperature Distribution Heatmap'".to_string(),
        "set xlabel 'X'".to_string(),
        "set ylabel 'Y'".to_string(),
        "set pm3d map".to_string(),
        format!("splot '{}' matrix with image", data_path.display()),
    ])
}

pub fn plot_surface(data_path: &Path) -> io::Result<()> {
    run_gnuplot(&[
        "set title 'Temperature Distribution 3D Surface Plot'".to_string(),
        "set xlabel 'X'".to_string(),
        "set ylabel 'Y'".to_string(),
        "set zlabel 'Temperature'".to_string(),
        "set pm3d".to_string(),
        format!("splot '{}' matrix with pm3d", data_path.display()),
    ])
}

fn run_gnuplot(script: &[String]) -> io::Result<()> {
    let mut child = Command::new("gnuplot")
        .arg("-persistent")
        .stdin(Stdio::piped())
        .spawn()?;

    if let Some(stdin) = child.stdin.as_mut() {
        for line in script {
            writeln!(stdin, "{line}")?;
        }
    }

    Ok(())
}
