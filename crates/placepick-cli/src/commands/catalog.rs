use placepick_infrastructure::ClientConfig;

pub fn list(config: &ClientConfig) {
    println!("📍 Places");
    for place in config.catalog.places.items() {
        println!("  - {}", place);
    }
    println!("🎨 Moods");
    for mood in config.catalog.moods.items() {
        println!("  - {}", mood);
    }
}
