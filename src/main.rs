// SPDX-License-Identifier: MPL-2.0
use iced_avatar::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap(),
        flash: args.values_from_str("--flash").unwrap_or_default(),
    };

    app::run(flags)
}
