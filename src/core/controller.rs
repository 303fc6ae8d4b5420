use std::time::Duration;

use anyhow::Result;
use log::{debug, info, warn};

use crate::data::{Catalogs, GameConfig};
use crate::model::{PartIndex, PartSlot, PopupEntry, PopupItem};
use crate::save::{SaveKey, Store};
use crate::text;
use crate::ui::{DialogKind, GameEvent, Screen, StatusReadout, UiCommand, View};

use super::accrual::{AccrualLoop, LoopTick};
use super::notify::NotifySlot;
use super::session::{SessionPhase, SessionState};

/// Result of feeding time or a tick to the controller. Accrual keeps going
/// when an autosave fails, so the commands are always valid.
#[derive(Debug, Default)]
pub struct TickReport {
    pub commands: Vec<UiCommand>,
    pub save_error: Option<anyhow::Error>,
}

impl TickReport {
    pub fn into_result(self) -> Result<Vec<UiCommand>> {
        match self.save_error {
            Some(err) => Err(err),
            None => Ok(self.commands),
        }
    }
}

/// Owns the save store and the session, turns UI events into store mutations
/// and answers with the commands the UI should apply.
#[derive(Debug)]
pub struct GameController<S> {
    store: S,
    catalogs: Catalogs,
    config: GameConfig,
    session: SessionState,
    accrual: Option<AccrualLoop>,
    notify: NotifySlot,
}

impl<S: Store> GameController<S> {
    pub fn new(store: S, catalogs: Catalogs, config: GameConfig) -> Self {
        Self {
            store,
            catalogs,
            config,
            session: SessionState::default(),
            accrual: None,
            notify: NotifySlot::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn coin_per_second(&self) -> i64 {
        self.session.coin_per_second
    }

    pub fn is_running(&self) -> bool {
        self.accrual.is_some()
    }

    pub fn ticks_fired(&self) -> Option<u64> {
        self.accrual.as_ref().map(AccrualLoop::ticks_fired)
    }

    pub fn notification(&self) -> Option<&str> {
        self.notify.message()
    }

    pub fn status(&self) -> StatusReadout {
        StatusReadout {
            money: self.store.get_data(SaveKey::Money),
            coin: self.store.get_data(SaveKey::Coin),
            coin_per_second: self.session.coin_per_second,
        }
    }

    /// Dispatches a UI event. Events whose handler is not bound in the
    /// current phase are dropped.
    pub fn handle(&mut self, event: GameEvent) -> Result<Vec<UiCommand>> {
        let phase = self.session.phase;
        let running = phase == SessionPhase::Running;

        let commands = match event {
            GameEvent::NewGame if phase == SessionPhase::Menu => self.new_game()?,
            GameEvent::Continue if phase == SessionPhase::Menu => self.continue_game(),
            GameEvent::ToggleDrawer if running => self.toggle_drawer(),
            GameEvent::ComputerClicked if running => {
                let items = self.computer_items();
                self.show_popup(text::MY_COMPUTER, &items)
            }
            GameEvent::DoorClicked if running => self.city(),
            GameEvent::ReturnHome if running && self.session.view == View::City => {
                self.return_home()
            }
            GameEvent::ClosePopup if running => self.close_popup(),
            GameEvent::ExitRequested if running => {
                self.show_dialog(text::CONFIRM_EXIT, DialogKind::ExitGame)
            }
            GameEvent::DialogConfirmed => self.resolve_dialog(true)?,
            GameEvent::DialogCancelled => self.resolve_dialog(false)?,
            GameEvent::TutorialDismissed if running && self.session.tutorial_visible => {
                self.dismiss_tutorial()
            }
            GameEvent::Overclock(slot) if running && self.session.popup_open => {
                self.overclock(slot)
            }
            ignored => {
                debug!("ignoring {ignored:?} while {phase:?}");
                Vec::new()
            }
        };

        Ok(commands)
    }

    /// Opens the main menu, loading the save if there is one.
    pub fn init(&mut self) -> Result<Vec<UiCommand>> {
        self.session.phase = SessionPhase::Menu;
        if self.store.check() {
            self.store.load()?;
            self.session.resumable = true;
        } else {
            info!("no save found; continue is disabled");
        }

        Ok(vec![
            UiCommand::ShowScreen(Screen::Menu),
            UiCommand::SetContinueEnabled(self.session.resumable),
        ])
    }

    pub fn new_game(&mut self) -> Result<Vec<UiCommand>> {
        info!("starting a new game");
        self.store.create()?;
        self.store.load()?;
        self.session.resumable = true;

        let mut commands = vec![UiCommand::SetContinueEnabled(true)];
        commands.extend(self.continue_game());
        Ok(commands)
    }

    pub fn continue_game(&mut self) -> Vec<UiCommand> {
        if !self.session.resumable {
            return self.show_notify(text::NO_SAVE_FILE);
        }

        let commands = self.game_init();
        self.start();
        commands
    }

    /// Switches to the game screen and fixes the mining rate from the
    /// installed parts.
    pub fn game_init(&mut self) -> Vec<UiCommand> {
        self.session.phase = SessionPhase::Running;
        self.session.tutorial_visible = self.store.get_data(SaveKey::Tutorial) == 1;
        self.session.coin_per_second = self.catalogs.coin_per_second(
            self.installed(PartSlot::Cpu),
            self.installed(PartSlot::Ram),
            self.installed(PartSlot::Vga),
        );
        if self.session.coin_per_second > 0 {
            info!("mining at {} coin/s", self.session.coin_per_second);
        } else {
            info!("a part is broken or missing; nothing is mined");
        }

        // Render only: coin moves on accrual ticks, never on opening the screen.
        vec![
            UiCommand::ShowScreen(Screen::Game),
            UiCommand::SetTutorialVisible(self.session.tutorial_visible),
            UiCommand::ShowView(self.session.view),
            UiCommand::RenderStatus(self.status()),
        ]
    }

    /// Starts a fresh accrual loop, cancelling any loop still running.
    pub fn start(&mut self) {
        if self.accrual.take().is_some() {
            warn!("accrual loop was still running; replacing it");
        }
        self.accrual = Some(AccrualLoop::new(
            self.config.tick_period(),
            self.config.autosave_every(),
        ));
    }

    /// Cancels the accrual loop. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.accrual.take().is_some()
    }

    /// Fires one accrual tick right away, if the loop is running.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if let Some(tick) = self.accrual.as_mut().map(AccrualLoop::fire) {
            self.run_tick(tick, &mut report);
        }
        report
    }

    /// Feeds elapsed wall time to the accrual loop and the notification slot.
    /// Every completed tick accrues even if an autosave in the batch fails;
    /// the first save error is reported.
    pub fn advance(&mut self, delta: Duration) -> TickReport {
        let ticks = self
            .accrual
            .as_mut()
            .map(|accrual| accrual.advance(delta))
            .unwrap_or_default();

        let mut report = TickReport::default();
        for tick in ticks {
            self.run_tick(tick, &mut report);
        }
        if self.notify.advance(delta) {
            report.commands.push(UiCommand::HideNotify);
        }
        report
    }

    fn run_tick(&mut self, tick: LoopTick, report: &mut TickReport) {
        report.commands.extend(self.update());
        if !tick.autosave {
            return;
        }
        debug!("autosave on tick {}", tick.index);
        if let Err(err) = self.save() {
            warn!("autosave on tick {} failed: {err:#}", tick.index);
            report.save_error.get_or_insert(err);
        }
    }

    /// Adds one second's worth of coin to the balance.
    pub fn update(&mut self) -> Vec<UiCommand> {
        let coin = self.store.get_data(SaveKey::Coin) + self.session.coin_per_second;
        self.store.set_data(SaveKey::Coin, coin);
        vec![UiCommand::RenderStatus(self.status())]
    }

    pub fn save(&mut self) -> Result<()> {
        self.store.save()
    }

    pub fn exit(&mut self) -> Result<Vec<UiCommand>> {
        self.save()?;
        if self.stop() {
            info!("accrual loop stopped");
        }
        self.session.phase = SessionPhase::Menu;
        self.session.popup_open = false;
        self.session.drawer_open = false;
        Ok(vec![
            UiCommand::HidePopup,
            UiCommand::SetDrawerVisible(false),
            UiCommand::ShowScreen(Screen::Menu),
        ])
    }

    pub fn show_notify(&mut self, message: &str) -> Vec<UiCommand> {
        self.notify.show(message, self.config.notify_duration());
        vec![UiCommand::ShowNotify(message.to_string())]
    }

    pub fn show_dialog(&mut self, message: &str, kind: DialogKind) -> Vec<UiCommand> {
        self.session.pending_dialog = Some(kind);
        vec![UiCommand::ShowDialog {
            message: message.to_string(),
            kind,
        }]
    }

    /// Answers the pending confirmation dialog, if any.
    pub fn resolve_dialog(&mut self, confirmed: bool) -> Result<Vec<UiCommand>> {
        let Some(kind) = self.session.pending_dialog else {
            return Ok(Vec::new());
        };

        let mut commands = vec![UiCommand::HideDialog];
        if confirmed {
            match kind {
                DialogKind::ExitGame => commands.extend(self.exit()?),
            }
        }
        self.session.pending_dialog = None;
        Ok(commands)
    }

    /// Toggles the popup. Opening rebuilds the list from `items`; closing
    /// only hides it.
    pub fn show_popup(&mut self, title: &str, items: &[PopupItem]) -> Vec<UiCommand> {
        let commands = if self.session.popup_open {
            vec![UiCommand::HidePopup]
        } else {
            self.session.popup_entries = items
                .iter()
                .map(|item| PopupEntry::render(item, &self.catalogs))
                .collect();
            vec![UiCommand::OpenPopup {
                title: title.to_string(),
                entries: self.session.popup_entries.clone(),
            }]
        };
        self.session.popup_open = !self.session.popup_open;
        commands
    }

    pub fn close_popup(&mut self) -> Vec<UiCommand> {
        self.session.popup_open = false;
        vec![UiCommand::HidePopup]
    }

    /// Parts currently in the computer, power supply first.
    pub fn computer_items(&self) -> Vec<PopupItem> {
        PartSlot::ALL
            .into_iter()
            .map(|slot| {
                PopupItem::new(
                    slot,
                    self.installed(slot),
                    self.store.get_data(slot.level_key()),
                )
            })
            .collect()
    }

    /// Overclock button on a popup row. Working parts are not affected yet.
    pub fn overclock(&mut self, slot: PartSlot) -> Vec<UiCommand> {
        let Some(broken) = self
            .session
            .popup_entries
            .iter()
            .find(|entry| entry.slot == slot)
            .map(|entry| entry.broken)
        else {
            return Vec::new();
        };

        if broken {
            return self.show_notify(text::BROKEN_PART_OVERCLOCK);
        }
        debug!("overclock requested for {slot}");
        Vec::new()
    }

    pub fn city(&mut self) -> Vec<UiCommand> {
        self.session.view = View::City;
        vec![UiCommand::ShowView(View::City)]
    }

    pub fn return_home(&mut self) -> Vec<UiCommand> {
        self.session.view = View::Home;
        vec![UiCommand::ShowView(View::Home)]
    }

    pub fn dismiss_tutorial(&mut self) -> Vec<UiCommand> {
        self.store.set_data(SaveKey::Tutorial, 0);
        self.session.tutorial_visible = false;
        vec![UiCommand::SetTutorialVisible(false)]
    }

    pub fn toggle_drawer(&mut self) -> Vec<UiCommand> {
        self.session.drawer_open = !self.session.drawer_open;
        vec![UiCommand::SetDrawerVisible(self.session.drawer_open)]
    }

    fn installed(&self, slot: PartSlot) -> PartIndex {
        match slot.index_key() {
            Some(key) => PartIndex(self.store.get_data(key)),
            None => PartIndex(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::{Result, bail};

    use super::GameController;
    use crate::core::SessionPhase;
    use crate::data::{Catalogs, GameConfig};
    use crate::model::PartSlot;
    use crate::save::{MemoryStore, SaveData, SaveKey, Store};
    use crate::text;
    use crate::ui::{DialogKind, GameEvent, Screen, UiCommand, View};

    fn controller_with(save: Option<SaveData>) -> GameController<MemoryStore> {
        let store = save.map(MemoryStore::with_save).unwrap_or_default();
        let catalogs = Catalogs::bundled().expect("bundled catalogs should parse");
        GameController::new(store, catalogs, GameConfig::default())
    }

    fn running_controller(save: SaveData) -> GameController<MemoryStore> {
        let mut controller = controller_with(Some(save));
        controller.init().expect("init");
        controller.handle(GameEvent::Continue).expect("continue");
        controller
    }

    #[test]
    fn init_without_save_disables_continue() {
        let mut controller = controller_with(None);
        let commands = controller.init().expect("init");

        assert_eq!(controller.session().phase, SessionPhase::Menu);
        assert!(!controller.session().resumable);
        assert!(commands.contains(&UiCommand::SetContinueEnabled(false)));
    }

    #[test]
    fn continue_without_save_notifies_and_stays_idle() {
        let mut controller = controller_with(None);
        controller.init().expect("init");
        let commands = controller.handle(GameEvent::Continue).expect("continue");

        assert_eq!(commands, vec![UiCommand::ShowNotify(text::NO_SAVE_FILE.to_string())]);
        assert!(!controller.is_running());
        assert_eq!(controller.session().phase, SessionPhase::Menu);
        assert_eq!(controller.store().save_count(), 0);
    }

    #[test]
    fn new_game_creates_save_and_starts_mining() {
        let mut controller = controller_with(None);
        controller.init().expect("init");
        let commands = controller.handle(GameEvent::NewGame).expect("new game");

        assert!(controller.store().check());
        assert!(controller.is_running());
        assert!(controller.session().tutorial_visible);
        assert!(commands.contains(&UiCommand::SetContinueEnabled(true)));
        assert!(commands.contains(&UiCommand::ShowScreen(Screen::Game)));
        assert!(controller.coin_per_second() > 0);
    }

    #[test]
    fn update_accrues_exactly_the_rate_each_time() {
        let mut controller = running_controller(SaveData {
            coin: 100,
            ..SaveData::default()
        });
        let rate = controller.coin_per_second();

        for _ in 0..25 {
            controller.update();
        }

        assert_eq!(controller.store().get_data(SaveKey::Coin), 100 + 25 * rate);
    }

    #[test]
    fn restarting_the_loop_never_doubles_accrual() {
        let mut controller = running_controller(SaveData::default());
        let rate = controller.coin_per_second();
        controller.start();
        controller.start();

        controller
            .advance(Duration::from_secs(1))
            .into_result()
            .expect("advance");

        assert_eq!(controller.store().get_data(SaveKey::Coin), rate);
        assert_eq!(controller.ticks_fired(), Some(1));
    }

    #[test]
    fn exit_saves_and_cancels_the_loop() {
        let mut controller = running_controller(SaveData::default());
        controller.handle(GameEvent::ExitRequested).expect("exit request");
        assert_eq!(controller.session().pending_dialog, Some(DialogKind::ExitGame));

        let commands = controller.handle(GameEvent::DialogConfirmed).expect("confirm");

        assert_eq!(
            commands,
            vec![
                UiCommand::HideDialog,
                UiCommand::HidePopup,
                UiCommand::SetDrawerVisible(false),
                UiCommand::ShowScreen(Screen::Menu),
            ]
        );
        assert!(!controller.is_running());
        assert_eq!(controller.store().save_count(), 1);
        assert_eq!(controller.session().pending_dialog, None);
        let idle = controller.advance(Duration::from_secs(5));
        assert!(idle.into_result().expect("advance").is_empty());
    }

    #[test]
    fn cancelling_the_exit_dialog_keeps_playing() {
        let mut controller = running_controller(SaveData::default());
        controller.handle(GameEvent::ExitRequested).expect("exit request");
        let commands = controller.handle(GameEvent::DialogCancelled).expect("cancel");

        assert_eq!(commands, vec![UiCommand::HideDialog]);
        assert!(controller.is_running());
        assert_eq!(controller.session().phase, SessionPhase::Running);
    }

    #[test]
    fn notification_hides_after_three_seconds() {
        let mut controller = controller_with(None);
        controller.init().expect("init");
        controller.handle(GameEvent::Continue).expect("continue");

        let early = controller.advance(Duration::from_secs(2));
        assert!(early.into_result().expect("advance").is_empty());
        let commands = controller
            .advance(Duration::from_secs(1))
            .into_result()
            .expect("advance");
        assert_eq!(commands, vec![UiCommand::HideNotify]);
        assert_eq!(controller.notification(), None);
    }

    #[test]
    fn city_return_is_only_bound_while_in_the_city() {
        let mut controller = running_controller(SaveData::default());
        assert!(controller.handle(GameEvent::ReturnHome).expect("home").is_empty());

        assert_eq!(
            controller.handle(GameEvent::DoorClicked).expect("door"),
            vec![UiCommand::ShowView(View::City)]
        );
        assert_eq!(
            controller.handle(GameEvent::ReturnHome).expect("home"),
            vec![UiCommand::ShowView(View::Home)]
        );
        assert!(controller.handle(GameEvent::ReturnHome).expect("home").is_empty());
    }

    #[test]
    fn dismissing_the_tutorial_clears_the_flag() {
        let mut controller = running_controller(SaveData::default());
        assert!(controller.session().tutorial_visible);

        let commands = controller.handle(GameEvent::TutorialDismissed).expect("dismiss");

        assert_eq!(commands, vec![UiCommand::SetTutorialVisible(false)]);
        assert_eq!(controller.store().get_data(SaveKey::Tutorial), 0);
    }

    #[test]
    fn game_screen_events_are_ignored_from_the_menu() {
        let mut controller = controller_with(Some(SaveData::default()));
        controller.init().expect("init");

        for event in [
            GameEvent::ComputerClicked,
            GameEvent::DoorClicked,
            GameEvent::ExitRequested,
            GameEvent::ToggleDrawer,
            GameEvent::Overclock(PartSlot::Cpu),
        ] {
            assert!(controller.handle(event).expect("ignored").is_empty(), "{event:?}");
        }
    }

    #[test]
    fn drawer_toggles() {
        let mut controller = running_controller(SaveData::default());
        assert_eq!(
            controller.handle(GameEvent::ToggleDrawer).expect("open"),
            vec![UiCommand::SetDrawerVisible(true)]
        );
        assert_eq!(
            controller.handle(GameEvent::ToggleDrawer).expect("close"),
            vec![UiCommand::SetDrawerVisible(false)]
        );
    }

    /// Store whose flush always fails, as with a full disk.
    #[derive(Debug, Default)]
    struct FailingStore {
        inner: MemoryStore,
        save_attempts: usize,
    }

    impl Store for FailingStore {
        fn check(&self) -> bool {
            self.inner.check()
        }

        fn create(&mut self) -> Result<()> {
            self.inner.create()
        }

        fn load(&mut self) -> Result<()> {
            self.inner.load()
        }

        fn save(&mut self) -> Result<()> {
            self.save_attempts += 1;
            bail!("disk full")
        }

        fn get_data(&self, key: SaveKey) -> i64 {
            self.inner.get_data(key)
        }

        fn set_data(&mut self, key: SaveKey, value: i64) {
            self.inner.set_data(key, value);
        }
    }

    #[test]
    fn failed_autosave_keeps_the_rest_of_the_batch() {
        let store = FailingStore {
            inner: MemoryStore::with_save(SaveData::default()),
            save_attempts: 0,
        };
        let catalogs = Catalogs::bundled().expect("bundled catalogs should parse");
        let mut controller = GameController::new(store, catalogs, GameConfig::default());
        controller.init().expect("init");
        controller.handle(GameEvent::Continue).expect("continue");
        controller.show_notify("pending");
        let rate = controller.coin_per_second();

        let report = controller.advance(Duration::from_secs(5));

        assert_eq!(controller.store().get_data(SaveKey::Coin), 5 * rate);
        assert_eq!(controller.ticks_fired(), Some(5));
        assert_eq!(controller.store().save_attempts, 1);
        let err = report.save_error.as_ref().expect("save error should be reported");
        assert!(format!("{err:#}").contains("disk full"));
        let renders = report
            .commands
            .iter()
            .filter(|command| matches!(command, UiCommand::RenderStatus(_)))
            .count();
        assert_eq!(renders, 5);
        assert_eq!(report.commands.last(), Some(&UiCommand::HideNotify));
        assert_eq!(controller.notification(), None);
    }

    #[test]
    fn exit_closes_popup_and_drawer_before_resuming() {
        let mut controller = running_controller(SaveData::default());
        controller.handle(GameEvent::ComputerClicked).expect("open popup");
        controller.handle(GameEvent::ToggleDrawer).expect("open drawer");
        assert!(controller.session().popup_open);

        controller.exit().expect("exit");
        assert!(!controller.session().popup_open);
        assert!(!controller.session().drawer_open);

        let commands = controller.handle(GameEvent::Continue).expect("continue");
        assert!(
            !commands
                .iter()
                .any(|command| matches!(command, UiCommand::OpenPopup { .. }))
        );
        let reopened = controller.handle(GameEvent::ComputerClicked).expect("open popup");
        assert!(matches!(reopened.as_slice(), [UiCommand::OpenPopup { .. }]));
    }
}
