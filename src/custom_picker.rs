// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! The "More Colors…" hook
//!
//! When the user commits the custom entry of the popup, the button asks its
//! `CustomColorPicker` for a color, seeded with the color the popup resolved
//! for the current selection. Returning `None` cancels the whole popup
//! interaction.

use std::process::Command;

use anyhow::{Context, Result};

use crate::model::Rgb;

/// Strategy invoked when the custom entry is committed
pub trait CustomColorPicker: Send {
    fn pick(&mut self, seed: Rgb) -> Option<Rgb>;
}

impl<F> CustomColorPicker for F
where
    F: FnMut(Rgb) -> Option<Rgb> + Send,
{
    fn pick(&mut self, seed: Rgb) -> Option<Rgb> {
        self(seed)
    }
}

/// Default hook: the desktop's color chooser dialog, run through `zenity`
#[derive(Debug, Clone)]
pub struct SystemColorChooser {
    program: String,
    title: String,
}

impl Default for SystemColorChooser {
    fn default() -> Self {
        Self {
            program: "zenity".to_string(),
            title: "Select Color".to_string(),
        }
    }
}

impl SystemColorChooser {
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the dialog. `Ok(None)` means the user dismissed it.
    fn run(&self, seed: Rgb) -> Result<Option<Rgb>> {
        let output = Command::new(&self.program)
            .arg("--color-selection")
            .arg(format!("--title={}", self.title))
            .arg(format!("--color={seed}"))
            .output()
            .with_context(|| format!("Failed to launch color chooser '{}'", self.program))?;

        if !output.status.success() {
            return Ok(None);
        }

        let stdout = String::from_utf8(output.stdout)
            .context("Color chooser printed invalid UTF-8")?;
        parse_chooser_output(stdout.trim()).map(Some)
    }
}

impl CustomColorPicker for SystemColorChooser {
    fn pick(&mut self, seed: Rgb) -> Option<Rgb> {
        match self.run(seed) {
            Ok(Some(color)) => {
                tracing::debug!("Color chooser returned {}", color);
                Some(color)
            }
            Ok(None) => {
                tracing::debug!("Color chooser dismissed");
                None
            }
            Err(e) => {
                tracing::warn!("Color chooser failed: {:#}", e);
                None
            }
        }
    }
}

/// Parse `rgb(r,g,b)`, `rgba(r,g,b,a)` or `#rrggbb`
fn parse_chooser_output(text: &str) -> Result<Rgb> {
    if text.starts_with('#') {
        return text
            .parse::<Rgb>()
            .with_context(|| format!("Unrecognised color '{text}'"));
    }

    let inner = text
        .strip_prefix("rgba(")
        .or_else(|| text.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| anyhow::anyhow!("Unrecognised color '{}'", text))?;

    let mut channels = inner.split(',').map(|part| {
        part.trim()
            .parse::<u8>()
            .with_context(|| format!("Bad channel '{}' in '{}'", part.trim(), text))
    });
    let mut next = || {
        channels
            .next()
            .unwrap_or_else(|| Err(anyhow::anyhow!("Too few channels in '{}'", text)))
    };
    let r = next()?;
    let g = next()?;
    let b = next()?;
    Ok(Rgb::new(r, g, b))
}
