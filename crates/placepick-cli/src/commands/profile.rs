use super::{client, notices};
use anyhow::{Result, bail};
use placepick_application::{LoadOutcome, ProfileEditor, SaveOutcome};
use placepick_core::catalog::{Catalog, SELECTION_CAPACITY, ToggleOutcome};
use placepick_core::preference::ProfilePreferences;
use placepick_infrastructure::ClientConfig;

/// Edits requested on the command line.
pub struct ProfileEdits {
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub places: Vec<String>,
    pub moods: Vec<String>,
}

async fn load(config: &ClientConfig) -> Result<ProfileEditor> {
    let editor = ProfileEditor::new(client(config)?, notices(), config.catalog.clone());
    match editor.load().await {
        LoadOutcome::Loaded => Ok(editor),
        _ => bail!("Could not load the profile"),
    }
}

fn print_selection(title: &str, catalog: &Catalog, selected: &[String]) {
    println!("{} ({}/{})", title, selected.len(), SELECTION_CAPACITY);
    for item in catalog.items() {
        let mark = if selected.contains(item) { "✓" } else { "·" };
        println!("  {} {}", mark, item);
    }
    // Server-side selections the local catalog does not offer.
    for item in selected.iter().filter(|item| !catalog.contains(item)) {
        println!("  ✓ {} (not in catalog)", item);
    }
}

fn print_profile(editor: &ProfileEditor, state: &ProfilePreferences) {
    println!("👤 {}", state.nickname());
    println!("✉️  {}", state.email());
    print_selection(
        "📍 Places",
        &editor.catalogs().places,
        state.selected_places().items(),
    );
    print_selection(
        "🎨 Moods",
        &editor.catalogs().moods,
        state.selected_moods().items(),
    );
}

fn report_toggle(kind: &str, name: &str, outcome: ToggleOutcome) {
    match outcome {
        ToggleOutcome::Added => println!("  + {}", name),
        ToggleOutcome::Removed => println!("  - {}", name),
        ToggleOutcome::AtCapacity => println!(
            "  ! {} not added: at most {} {} can be selected",
            name, SELECTION_CAPACITY, kind
        ),
        ToggleOutcome::NotInCatalog => println!("  ! {} is not a known {}", name, kind),
        ToggleOutcome::NotLoaded => println!("  ! {} skipped: profile not loaded", name),
    }
}

pub async fn show(config: &ClientConfig) -> Result<()> {
    let editor = load(config).await?;
    print_profile(&editor, &editor.state().await);
    Ok(())
}

pub async fn edit(config: &ClientConfig, edits: ProfileEdits) -> Result<()> {
    let editor = load(config).await?;

    if let Some(nickname) = &edits.nickname {
        editor.edit_nickname(nickname).await;
    }
    if let Some(email) = &edits.email {
        editor.edit_email(email).await;
    }
    for place in &edits.places {
        report_toggle("places", place, editor.toggle_place(place).await);
    }
    for mood in &edits.moods {
        report_toggle("moods", mood, editor.toggle_mood(mood).await);
    }

    match editor.save().await {
        SaveOutcome::Saved => {
            print_profile(&editor, &editor.state().await);
            Ok(())
        }
        SaveOutcome::Rejected(rejection) => bail!("{}", rejection),
        SaveOutcome::Failed => bail!("Saving the profile failed"),
    }
}
