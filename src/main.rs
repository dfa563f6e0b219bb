use chrono::{Local, NaiveDate};
use clap::Parser;
use daybook::application::{
    edit_entry, init::init, parse_entries, parse_selection, write_entry, ConfigService,
    EntryChanges, EntryStore,
};
use daybook::cli::{
    format_entry_detail, format_entry_list, format_migration_report, Cli, Commands, EntryFields,
};
use daybook::domain::{resolve_date, EntryFilter, Mood, MoodGroup, ResultStatus};
use daybook::error::{DaybookError, Result};
use daybook::infrastructure::repository::DAYBOOK_DIR;
use daybook::infrastructure::{DiaryRepository, EditorSession, FileStore, FileSystemRepository};
use std::fs;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn open_store() -> Result<(FileSystemRepository, EntryStore<FileStore>)> {
    let repo = FileSystemRepository::discover()?;
    let store = EntryStore::open(&repo)?;
    Ok((repo, store))
}

fn resolve_optional(reference: Option<&str>) -> Result<Option<NaiveDate>> {
    reference.map(|r| resolve_date(r, today())).transpose()
}

/// Turn the shared entry flags into changes; `initial` seeds the editor buffer.
fn entry_changes(
    repo: &FileSystemRepository,
    fields: EntryFields,
    initial: &str,
) -> Result<EntryChanges> {
    let content = if fields.editor {
        let editor = repo.load_config()?.get_editor();
        let scratch = repo.root().join(DAYBOOK_DIR).join("ENTRY_EDIT.md");
        Some(EditorSession::new(editor).edit_text(&scratch, initial)?)
    } else {
        fields.content
    };

    let mood = fields
        .mood
        .as_deref()
        .map(Mood::from_str)
        .transpose()
        .map_err(DaybookError::Config)?;

    let selections = fields
        .selections
        .iter()
        .map(|s| parse_selection(s))
        .collect::<Result<Vec<_>>>()?;

    Ok(EntryChanges {
        content,
        date: resolve_optional(fields.date.as_deref())?,
        mood,
        emoji: fields.emoji,
        add_tags: fields.tags,
        selections,
        ..EntryChanges::default()
    })
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized daybook diary at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("corrupt_data = {}", config.corrupt_data.as_str());
                println!("migrate_on_open = {}", config.migrate_on_open);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: daybook config [--list | <key> [<value>]]");
                println!("Valid keys: editor, corrupt_data, migrate_on_open, created");
            }
            Ok(())
        }
        Commands::Write { title, fields } => {
            let (repo, store) = open_store()?;
            let changes = EntryChanges {
                title: Some(title),
                ..entry_changes(&repo, fields, "")?
            };
            let entry = write_entry(&store, changes, today())?;
            println!("{}", entry.id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            fields,
            clear_tags,
            clear_selections,
            result,
            status,
        } => {
            let (repo, store) = open_store()?;
            let initial = if fields.editor {
                store
                    .get(&id)?
                    .ok_or_else(|| DaybookError::EntryNotFound(id.clone()))?
                    .content
            } else {
                String::new()
            };
            let result_status = status
                .as_deref()
                .map(ResultStatus::from_str)
                .transpose()
                .map_err(DaybookError::Config)?;

            let changes = EntryChanges {
                title,
                clear_tags,
                clear_selections,
                actual_result: result,
                result_status,
                ..entry_changes(&repo, fields, &initial)?
            };
            let entry = edit_entry(&store, &id, changes)?;
            print!("{}", format_entry_detail(&entry));
            Ok(())
        }
        Commands::Show { id } => {
            let (_, store) = open_store()?;
            let entry = store
                .get(&id)?
                .ok_or_else(|| DaybookError::EntryNotFound(id.clone()))?;
            print!("{}", format_entry_detail(&entry));
            Ok(())
        }
        Commands::List { from, to, limit } => {
            let (_, store) = open_store()?;
            let filter = EntryFilter::default().between(
                resolve_optional(from.as_deref())?,
                resolve_optional(to.as_deref())?,
            );
            let mut entries = store.search(&filter)?;
            if let Some(limit) = limit {
                entries.truncate(limit);
            }
            println!("{}", format_entry_list(&entries, today()).trim_end());
            Ok(())
        }
        Commands::Search {
            text,
            mood,
            tag,
            from,
            to,
        } => {
            let (_, store) = open_store()?;
            let mut filter = EntryFilter::default().between(
                resolve_optional(from.as_deref())?,
                resolve_optional(to.as_deref())?,
            );
            if let Some(text) = text {
                filter = filter.text(text);
            }
            if let Some(mood) = mood {
                let group = MoodGroup::from_str(&mood).map_err(DaybookError::Config)?;
                filter = filter.mood_group(group);
            }
            if let Some(tag) = tag {
                filter = filter.tag(tag);
            }

            let entries = store.search(&filter)?;
            println!("{}", format_entry_list(&entries, today()).trim_end());
            Ok(())
        }
        Commands::Delete { id } => {
            let (_, store) = open_store()?;
            if store.remove(&id)? {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with id {}; nothing deleted", id);
            }
            Ok(())
        }
        Commands::MigrateTags => {
            let (_, store) = open_store()?;
            let report = store.migrate_legacy_tags()?;
            println!("{}", format_migration_report(&report));
            Ok(())
        }
        Commands::Sample => {
            let (_, store) = open_store()?;
            match store.generate_sample_data(today())? {
                0 => println!("Diary already has entries; no sample data added"),
                n => println!("Added {} sample entries", n),
            }
            Ok(())
        }
        Commands::Wipe { yes } => {
            if !yes {
                return Err(DaybookError::Config(
                    "Refusing to delete all entries without --yes".to_string(),
                ));
            }
            let (_, store) = open_store()?;
            store.clear_all()?;
            println!("Deleted all entries");
            Ok(())
        }
        Commands::Export => {
            let (_, store) = open_store()?;
            println!("{}", store.export_json()?);
            Ok(())
        }
        Commands::Import { file, yes } => {
            if !yes {
                return Err(DaybookError::Config(
                    "Refusing to replace all entries without --yes".to_string(),
                ));
            }
            let entries = parse_entries(&fs::read_to_string(&file)?)?;
            let count = entries.len();
            let (_, store) = open_store()?;
            store.replace_all(entries)?;
            println!("Imported {} entries", count);
            Ok(())
        }
    }
}
