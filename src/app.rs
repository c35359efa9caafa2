use crate::*;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Everything a run needs, merged from the environment config and the
/// command line (command line wins).
#[derive(Debug, Clone)]
pub struct Settings {
    pub layout: Layout,
    pub namespace: String,
    pub dialect: SqlDialect,
    pub output_dir: PathBuf,
    pub mode: ExtractMode,
    pub policy: RowErrorPolicy,
    /// Preselected tables; `None` asks the user.
    pub tables: Option<Vec<String>>,
    /// Take derived class names without asking.
    pub defaults: bool,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Result<Self> {
        let dialect = match args.dialect {
            Some(dialect) => dialect,
            None => config.dialect.parse()?,
        };
        Ok(Self {
            layout: Layout::new(config.terminal_width()),
            namespace: args
                .namespace
                .clone()
                .unwrap_or_else(|| config.namespace.clone()),
            dialect,
            output_dir: args
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output_dir)),
            mode: if args.legacy_split {
                ExtractMode::Legacy
            } else {
                ExtractMode::Structured
            },
            policy: args.on_error,
            tables: args.tables.clone(),
            defaults: args.defaults,
        })
    }
}

/// Read the dump at `file`, rejecting missing files and non `.sql` paths
/// before anything else happens.
pub fn load_dump(file: &Path) -> Result<String> {
    if !file.exists() {
        return Err(Error::Usage("File not found.".to_string()));
    }
    if file.extension().is_none_or(|ext| ext != "sql") {
        return Err(Error::Usage(
            "Invalid file format. Please provide a .sql file.".to_string(),
        ));
    }
    Ok(fs::read_to_string(file)?)
}

/// Convert the selected tables of `file` into seeder files and return the
/// paths written, in table order.
pub fn run<R: BufRead, W: Write>(
    file: &Path,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<PathBuf>> {
    let sql = load_dump(file)?;
    let statements = parse_script(&sql, settings.dialect)?;
    let groups = group_inserts(&statements, settings.mode);
    let layout = settings.layout;

    prompter.show(&layout.table_list(&groups))?;
    let selected = match &settings.tables {
        Some(tables) => tables.clone(),
        None => prompter.select_tables()?,
    };
    prompter.show(&[layout.separator()])?;

    for name in selected.iter().filter(|name| !groups.iter().any(|g| &g.name == *name)) {
        warn!("No INSERT data for table {name} in {}", file.display());
    }

    let mut written = Vec::new();
    for group in groups.iter().filter(|g| selected.contains(&g.name)) {
        let default = default_class_name(&group.name);
        let class_name = if settings.defaults {
            default
        } else {
            prompter.class_name(&group.name, &default)?
        };
        validate_class_name(&class_name)?;
        prompter.show(&layout.table_detail(group, &class_name))?;

        let seeder = Seeder::new(&class_name, &settings.namespace);
        let content = seeder.render_group(group, settings.policy)?;
        fs::create_dir_all(&settings.output_dir)?;
        let path = settings.output_dir.join(seeder.file_name());
        fs::write(&path, content)?;
        info!("Wrote {} rows to {}", group.row_count(), path.display());

        prompter.show(&layout.file_created(&seeder.file_name()))?;
        written.push(path);
    }
    Ok(written)
}
