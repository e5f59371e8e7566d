use iced_kit::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap();
    let grid_side = args.opt_value_from_str("--grid").unwrap();

    let mut rest = args.finish().into_iter();
    let image_path = rest.next().and_then(|s| s.into_string().ok());
    let labels_path = rest.next().and_then(|s| s.into_string().ok());

    app::run(Flags {
        lang,
        image_path,
        labels_path,
        grid_side,
    })
}
