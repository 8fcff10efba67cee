/* Copyright (C) 2025  the acc-switcher developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Converts a Steam account id between its four textual encodings and
//! records the result in the settings file.

use std::env;

use anyhow::Context;
use platform_settings::SettingsFile;
use steamid_convert::Conversion;
use tracing::info;

mod logging;

/// Environment variable overriding where settings are stored.
const SETTINGS_ENV_VAR: &str = "ACC_SWITCHER_SETTINGS";

/// Default settings file, relative to the working directory.
const SETTINGS_FILE: &str = "AccSwitcherSettings.json";

fn main() -> anyhow::Result<()> {
    logging::init();

    let input = env::args()
        .nth(1)
        .context("usage: acc-switcher <steam-id>")?;

    let conversion = input.parse::<Conversion>()?;

    println!("{conversion}");

    let path = env::var(SETTINGS_ENV_VAR).unwrap_or_else(|_| String::from(SETTINGS_FILE));
    let mut settings = SettingsFile::load(path)?;

    settings.set("LastConvertedId", &conversion)?;

    info!(encoding = %conversion.encoding, id64 = %conversion.id64, "recorded conversion");

    Ok(())
}
