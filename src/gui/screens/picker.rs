use iced::{
    Alignment::Center,
    Element,
    widget::{button, column, container, text},
};

use crate::gui::Message;

#[derive(Debug, Clone, Default)]
pub struct PickerScreen {
    status: Option<String>,
}

impl PickerScreen {
    pub fn with_status(status: String) -> Self {
        Self {
            status: Some(status),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut content = column![
            text("Shapescope").size(32),
            text("Detect geometric shapes in an image"),
            button("Choose Image").on_press(Message::ChooseImage),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        if let Some(status) = &self.status {
            content = content.push(text(status.as_str()).size(14));
        }

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }
}
