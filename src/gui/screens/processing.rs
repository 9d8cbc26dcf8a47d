use iced::{
    Element,
    widget::{container, text},
};

use crate::gui::Message;

#[derive(Debug, Clone)]
pub struct ProcessingScreen;

impl ProcessingScreen {
    pub fn view(&self) -> Element<'_, Message> {
        container(text("Analyzing image..."))
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }
}
