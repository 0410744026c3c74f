use padplane::map;
use padplane::settings::{self};

fn main() {
    env_logger::init();

    let settings = settings::load_config().unwrap();
    let mut map = map::from_settings(&settings);

    map.generate_pad_plane();
    map.dump().unwrap();
}
