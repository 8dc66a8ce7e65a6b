// SPDX-License-Identifier: MPL-2.0
//! View rendering for the mixer window.
//!
//! Every channel is a column holding its name, the knob with its value
//! label, the level the knob last reported and a reset button.

use super::{Channel, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::widgets;
use iced::{
    widget::{button, Column, Container, Row, Text},
    Alignment, Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub channels: &'a [Channel],
    pub knob_size: f32,
    pub config_warning: Option<&'a str>,
}

/// Renders the mixer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let strips = ctx
        .channels
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (index, channel)| {
            row.push(view_channel(index, channel, ctx.knob_size))
        });

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(Alignment::Center);

    if let Some(warning) = ctx.config_warning {
        column = column.push(Text::new(warning).size(typography::BODY));
    }

    if ctx.channels.is_empty() {
        column = column.push(Text::new("No channels configured").size(typography::BODY_LG));
    } else {
        column = column.push(strips);
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_channel(index: usize, channel: &Channel, knob_size: f32) -> Element<'_, Message> {
    let knob = widgets::knob_view(&channel.knob, knob_size, move |input| Message::Knob {
        index,
        input,
    });

    Column::new()
        .push(Text::new(channel.name.as_str()).size(typography::TITLE_SM))
        .push(knob)
        .push(Text::new(format!("{:.0}%", channel.level.value())).size(typography::BODY))
        .push(button(Text::new("Reset").size(typography::BODY)).on_press(Message::Reset(index)))
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .into()
}
