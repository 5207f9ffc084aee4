use palette_snap_application::infrastructure_config::{
    Config, ImageConfig, LibraryConfig, StoreBackend,
};
use tracing::info;

pub fn print_api_info(config: &Config) {
    print_endpoint_info(config);
    print_configuration_info(config);
}

fn print_endpoint_info(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📋 Endpoints:");
    info!("  🎨 Generate palette: POST {}/api/generate-palette", base_url);
    info!("  📚 Palette library: {}/api/palettes", base_url);
    if cfg!(feature = "docs") {
        info!("  📖 Swagger UI: {}/docs", base_url);
        info!("  📄 OpenAPI JSON: {}/api-docs/openapi.json", base_url);
    }
}

fn print_configuration_info(config: &Config) {
    info!("⚙️  Configuration:");
    info!("  🌍 Environment: {}", config.environment.env);
    print_image_configuration(&config.image);
    print_library_configuration(&config.library);
    info!(
        "  📦 Request body limit: {} bytes",
        config.server.body_limit_bytes
    );
}

fn print_image_configuration(image: &ImageConfig) {
    info!(
        "  📐 Images shrunk to fit {}x{} pixels",
        image.max_dimension, image.max_dimension
    );
    info!("  ⏱️  Decode timeout: {}ms", image.decode_timeout_ms);
}

fn print_library_configuration(library: &LibraryConfig) {
    match library.backend {
        StoreBackend::Memory => info!("  🗄️  Library: in memory, lost on restart"),
        StoreBackend::JsonFile => info!("  🗄️  Library: JSON file at {}", library.file_path),
    }
    info!(
        "  🏷️  Default palette name: {}, sample seeding {}",
        library.default_palette_name,
        if library.allow_sample_seed {
            "ENABLED"
        } else {
            "DISABLED"
        }
    );
}
