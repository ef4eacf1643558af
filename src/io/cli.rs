//! Command-line interface over the project store and batch PNG rendering

use crate::catalog::blocks::{BlockCategory, blocks_in, find_block};
use crate::editor::{EditorSession, LogSink};
use crate::io::configuration::{
    CELL_SIZE_DEFAULT, DEFAULT_STORE_DIR, GRID_DEFAULT_COLS, GRID_DEFAULT_ROWS,
};
use crate::io::error::{PlannerError, Result, file_system, invalid_parameter};
use crate::io::image::{render_grid, save_png};
use crate::io::progress::ProgressManager;
use crate::io::project::parse_import;
use crate::io::script::{parse_script, run_script};
use crate::io::store::ProjectStore;
use crate::spatial::BlockGrid;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "blueprint")]
#[command(author, version, about = "Plan block builds on a grid, one layer at a time")]
/// Command-line arguments for the planner
pub struct Cli {
    /// Directory holding saved projects
    #[arg(short, long, global = true, default_value = DEFAULT_STORE_DIR)]
    pub store: PathBuf,

    /// Suppress progress output and informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Planner operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create and save an empty project
    New {
        /// Project name
        name: String,
        /// Grid rows
        #[arg(short, long, default_value_t = GRID_DEFAULT_ROWS)]
        rows: usize,
        /// Grid columns
        #[arg(short, long, default_value_t = GRID_DEFAULT_COLS)]
        cols: usize,
    },
    /// List saved projects, most recently updated first
    List,
    /// Print a project as text with its block counts
    Show {
        /// Project identifier
        id: String,
    },
    /// Replay an edit script against a project and save the result
    Edit {
        /// Project identifier
        id: String,
        /// Script file, one command per line
        script: PathBuf,
    },
    /// Delete a saved project
    Delete {
        /// Project identifier
        id: String,
    },
    /// Import a project document into the store
    Import {
        /// JSON project file
        file: PathBuf,
    },
    /// Write a saved project as a JSON document
    Export {
        /// Project identifier
        id: String,
        /// Output path; defaults to a name derived from the project
        output: Option<PathBuf>,
    },
    /// Print the block palette grouped by category
    Blocks,
    /// Render project documents to PNG blueprints next to each input
    Render {
        /// JSON project file or directory of them
        #[arg(value_name = "TARGET")]
        target: PathBuf,
        /// Pixel edge length of one cell
        #[arg(long, default_value_t = CELL_SIZE_DEFAULT)]
        cell_size: u32,
        /// Render files even if the PNG already exists
        #[arg(short, long)]
        no_skip: bool,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Text picture of a grid: one symbol per cell, `.` for air
///
/// Symbols are padded to two columns so multi-letter icons stay aligned.
pub fn render_text(grid: &BlockGrid) -> String {
    let mut text = String::new();
    for row in 0..grid.rows() {
        let line = (0..grid.cols())
            .map(|col| {
                let symbol = grid
                    .get(row, col)
                    .and_then(find_block)
                    .map_or(".", |block| block.icon_symbol);
                format!("{symbol:<2}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

/// Palette listing: one heading per category, then `id  symbol  name` lines
pub fn render_palette() -> String {
    let mut text = String::new();
    for category in BlockCategory::ALL {
        text.push_str(category.label());
        text.push('\n');
        for block in blocks_in(category) {
            text.push_str(&format!(
                "  {:<16} {:<2} {}\n",
                block.id, block.icon_symbol, block.name
            ));
        }
    }
    text
}

fn ensure(accepted: bool, session: &EditorSession<LogSink>, operation: &'static str) -> Result<()> {
    if accepted {
        return Ok(());
    }
    Err(PlannerError::Rejected {
        operation,
        reason: session
            .sink()
            .last_error()
            .unwrap_or("rejected by the editor")
            .to_string(),
    })
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(file_system(path, "read"))
}

/// Runs one parsed command line against the store
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the command, writing results to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written, the editor
    /// rejects the operation, or a rendered file cannot be produced
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Command::Render {
                target,
                cell_size,
                no_skip,
            } => {
                let mut processor = FileProcessor::new(
                    target.clone(),
                    *cell_size,
                    !*no_skip,
                    self.cli.should_show_progress(),
                );
                let rendered = processor.process()?;
                writeln!(out, "Rendered {} blueprint(s)", rendered.len())
                    .map_err(file_system("<stdout>", "write"))
            }
            Command::Blocks => {
                write!(out, "{}", render_palette()).map_err(file_system("<stdout>", "write"))
            }
            command => {
                let mut store = ProjectStore::open(&self.cli.store)?;
                Self::run_store_command(command, &mut store, out)
            }
        }
    }

    fn run_store_command(
        command: &Command,
        store: &mut ProjectStore,
        out: &mut impl Write,
    ) -> Result<()> {
        let mut session =
            EditorSession::new(LogSink::new()).with_recent_blocks(store.recent_blocks().clone());

        let report = match command {
            Command::New { name, rows, cols } => {
                ensure(
                    session.start_new_project(name, *rows, *cols),
                    &session,
                    "create project",
                )?;
                ensure(session.save_to(store, name), &session, "save project")?;
                session.project_id().unwrap_or_default().to_string()
            }
            Command::List => {
                let projects = store.projects_by_recency();
                if projects.is_empty() {
                    "No saved projects.".to_string()
                } else {
                    projects
                        .iter()
                        .map(|project| {
                            format!(
                                "{}\t{}\t{}x{}\t{}",
                                project.id,
                                project.name,
                                project.rows,
                                project.cols,
                                project.updated_at.to_rfc3339()
                            )
                        })
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::Show { id } => {
                ensure(session.load_from_store(store, id), &session, "load project")?;
                let counts = session
                    .block_counts()
                    .iter()
                    .map(|(block, count)| format!("{block}: {count}"))
                    .collect::<Vec<_>>();
                let (rows, cols) = session.grid().dimensions();
                format!(
                    "{} ({rows}x{cols}, {} blocks)\n{}{}",
                    session.project_name(),
                    session.total_area(),
                    render_text(session.grid()),
                    counts.join("\n")
                )
            }
            Command::Edit { id, script } => {
                let commands = parse_script(&read_text(script)?)?;
                ensure(session.load_from_store(store, id), &session, "load project")?;
                let summary = run_script(&commands, &mut session);
                if session.has_unsaved_changes() {
                    let name = session.project_name().to_string();
                    ensure(session.save_to(store, &name), &session, "save project")?;
                }
                store.set_recent_blocks(session.recent_blocks().clone())?;
                format!(
                    "Applied {} command(s), {} edit(s), {} rejected",
                    summary.commands,
                    summary.edits,
                    session.sink().error_count()
                )
            }
            Command::Delete { id } => {
                ensure(
                    session.delete_from_store(store, id),
                    &session,
                    "delete project",
                )?;
                format!("Deleted {id}")
            }
            Command::Import { file } => {
                ensure(
                    session.import_json(&read_text(file)?),
                    &session,
                    "import project",
                )?;
                let name = session.project_name().to_string();
                ensure(session.save_to(store, &name), &session, "save project")?;
                session.project_id().unwrap_or_default().to_string()
            }
            Command::Export { id, output } => {
                ensure(session.load_from_store(store, id), &session, "load project")?;
                let path = output
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(session.export_file_name()));
                ensure(session.export_json(&path), &session, "export project")?;
                path.display().to_string()
            }
            Command::Render { .. } | Command::Blocks => {
                return Err(invalid_parameter(
                    "command",
                    &format!("{command:?}"),
                    &"command does not use the project store",
                ));
            }
        };

        writeln!(out, "{report}").map_err(file_system("<stdout>", "write"))
    }
}

/// Orchestrates batch rendering of project files with progress tracking
pub struct FileProcessor {
    target: PathBuf,
    cell_size: u32,
    skip_existing: bool,
    quiet: bool,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor rendering `target` at `cell_size` pixels per cell
    pub fn new(target: PathBuf, cell_size: u32, skip_existing: bool, show_progress: bool) -> Self {
        Self {
            target,
            cell_size,
            skip_existing,
            quiet: !show_progress,
            progress_manager: show_progress.then(ProgressManager::new),
        }
    }

    /// Render every selected file, returning the PNG paths written
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a JSON file or directory, or
    /// any file fails to parse or render
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut written = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            written.push(self.process_file(file, index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.target.is_file() {
            if is_json(&self.target) {
                Ok(self
                    .should_process_file(&self.target)
                    .then(|| self.target.clone())
                    .into_iter()
                    .collect())
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.target.display(),
                    &"target file must be a JSON project document",
                ))
            }
        } else if self.target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(&self.target).map_err(file_system(&self.target, "list"))?;
            for entry in entries {
                let path = entry.map_err(file_system(&self.target, "list"))?.path();
                if is_json(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.target.display(),
                &"target must be a JSON file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.skip_existing {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            if !self.quiet {
                log::info!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<PathBuf> {
        let output_path = Self::get_output_path(input_path);
        let imported = parse_import(&read_text(input_path)?)?;
        let grid = imported.grid;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, grid.rows());
        }

        let mut progress = self.progress_manager.as_mut();
        let img = render_grid(&grid, self.cell_size, |row| {
            if let Some(pm) = progress.as_deref_mut() {
                pm.update_rows(index, row + 1);
            }
        })?;
        save_png(&img, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        log::info!(
            "Rendered \"{}\" to {}",
            imported.name,
            output_path.display()
        );
        Ok(output_path)
    }

    /// PNG written for a given input file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        input_path.with_extension("png")
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("json")
}
