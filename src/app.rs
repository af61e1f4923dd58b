use crate::config::Config;
use crate::message::Message;
use crate::model::{ControlState, WorklistClient, WorklistState};
use crate::views::{control_panel, header_panel, worklist_panel};
use iced::widget::{column, container, row};
use iced::{application, Element, Length, Task, Theme};

const APP_TITLE: &str = "Modality Emulator";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let config = Config::from_env();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run_with(move || (App::new(&config), Task::none()))
}

pub struct App {
    client: WorklistClient,
    worklist: WorklistState,
    control: ControlState,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let client = WorklistClient::new(config.worklist_url());
        log::info!("Worklist endpoint: {}", client.url());

        Self {
            client,
            worklist: WorklistState::default(),
            control: ControlState::default(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FetchWorklist => {
                self.worklist.begin_fetch();
                let client = self.client.clone();
                Task::perform(async move { client.fetch().await }, Message::WorklistFetched)
            }
            Message::WorklistFetched(result) => {
                if let Err(err) = &result {
                    log::warn!("Keeping current worklist after failed fetch: {err}");
                }
                self.worklist.apply_fetch(result);
                Task::none()
            }
            Message::StartServer => {
                self.control.start();
                log::info!("Emulator server started");
                Task::none()
            }
            Message::StopServer => {
                self.control.stop();
                log::info!("Emulator server stopped");
                Task::none()
            }
            Message::SendImage => {
                if self.control.send_one() {
                    log::debug!("Simulated PACS send #{}", self.control.sent_count());
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let control = container(control_panel(&self.control)).width(Length::FillPortion(1));
        let worklist = container(worklist_panel(&self.worklist))
            .width(Length::FillPortion(2))
            .height(Length::Fill);

        column![
            header_panel(),
            row![control, worklist]
                .spacing(24)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .padding(24)
        .spacing(24)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FetchError, WorklistEntry};

    fn app() -> App {
        App::new(&Config {
            backend_url: "http://127.0.0.1:9".into(),
        })
    }

    #[test]
    fn client_targets_worklist_path() {
        assert_eq!(app().client.url(), "http://127.0.0.1:9/api/worklist");
    }

    #[test]
    fn fetch_request_marks_loading() {
        let mut app = app();
        let _ = app.update(Message::FetchWorklist);
        assert!(app.worklist.is_loading());
        assert_eq!(app.worklist.error(), None);
    }

    #[test]
    fn fetched_rows_replace_table() {
        let mut app = app();
        let rows = vec![WorklistEntry::new("Wati", "PID-3", "CR", "Hand X-Ray", "ACC-3", "Completed")];
        let _ = app.update(Message::FetchWorklist);
        let _ = app.update(Message::WorklistFetched(Ok(rows.clone())));
        assert_eq!(app.worklist.rows(), rows.as_slice());
        assert!(!app.worklist.is_loading());
    }

    #[test]
    fn fetch_failure_leaves_control_panel_alone() {
        let mut app = app();
        let _ = app.update(Message::StartServer);
        let _ = app.update(Message::SendImage);
        let before = app.worklist.rows().to_vec();

        let _ = app.update(Message::WorklistFetched(Err(FetchError::Status(502))));

        assert_eq!(app.worklist.rows(), before.as_slice());
        assert!(app.worklist.error().is_some());
        assert!(app.control.is_running());
        assert_eq!(app.control.sent_count(), 1);
    }

    #[test]
    fn send_is_ignored_until_started() {
        let mut app = app();
        let _ = app.update(Message::SendImage);
        assert_eq!(app.control.sent_count(), 0);

        let _ = app.update(Message::StartServer);
        let _ = app.update(Message::SendImage);
        let _ = app.update(Message::StopServer);
        let _ = app.update(Message::SendImage);
        let _ = app.update(Message::StartServer);

        assert!(app.control.is_running());
        assert_eq!(app.control.sent_count(), 1);
    }
}
