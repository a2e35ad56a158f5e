use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::core::{Message, TabController};
use crate::domain::{Domain, Snapshot};
use crate::infrastructure::RuntimeCommand;
use crate::modules;

/// Rows moved by PageUp / PageDown
pub const PAGE_SIZE: usize = 10;

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Cpu,
    Memory,
    Disk,
    Network,
    Host,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Cpu, Tab::Memory, Tab::Disk, Tab::Network, Tab::Host];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Cpu => "CPU",
            Tab::Memory => "Memory",
            Tab::Disk => "Disks",
            Tab::Network => "Networks",
            Tab::Host => "General Info",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|tab| tab == self).unwrap_or(0)
    }

    /// The metric domain whose snapshots fill this tab
    pub fn domain(&self) -> Domain {
        match self {
            Tab::Cpu => Domain::Cpu,
            Tab::Memory => Domain::Memory,
            Tab::Disk => Domain::Disk,
            Tab::Network => Domain::Network,
            Tab::Host => Domain::Host,
        }
    }

    pub fn for_domain(domain: Domain) -> Tab {
        match domain {
            Domain::Cpu => Tab::Cpu,
            Domain::Memory => Tab::Memory,
            Domain::Disk => Tab::Disk,
            Domain::Network => Tab::Network,
            Domain::Host => Tab::Host,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Tab::Cpu => modules::cpu::PLACEHOLDER,
            Tab::Memory => modules::memory::PLACEHOLDER,
            Tab::Disk => modules::disk::PLACEHOLDER,
            Tab::Network => modules::network::PLACEHOLDER,
            Tab::Host => modules::host::PLACEHOLDER,
        }
    }
}

/// A scrollable row set with one cursor.
///
/// The cursor survives row replacement but never points past the last row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<Vec<String>>,
    cursor: usize,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highlighted row, `None` while the table is empty
    pub fn selected(&self) -> Option<usize> {
        (!self.rows.is_empty()).then_some(self.cursor)
    }

    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
        Self::clamp_selection(&mut self.cursor, self.rows.len());
    }

    pub fn move_up(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    pub fn move_down(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_add(n);
        Self::clamp_selection(&mut self.cursor, self.rows.len());
    }

    fn clamp_selection(selection: &mut usize, len: usize) {
        if len == 0 {
            *selection = 0;
        } else if *selection >= len {
            *selection = len - 1;
        }
    }
}

/// Dashboard state, owned by the event loop and mutated only by [`App::update`]
#[derive(Debug)]
pub struct App {
    tabs: TabController,
    /// One rendered text slot per entry of [`Tab::ALL`]
    content: Vec<String>,
    pub cpu_table: TableView,
    pub net_table: TableView,
    /// Domains whose poll loop has been requested
    polling: BTreeSet<Domain>,
    pub width: u16,
    pub height: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(initial: Tab) -> Self {
        Self {
            tabs: TabController::new(Tab::ALL.len(), initial.index()),
            content: Tab::ALL
                .iter()
                .map(|tab| tab.placeholder().to_string())
                .collect(),
            cpu_table: TableView::new(),
            net_table: TableView::new(),
            polling: BTreeSet::new(),
            width: 0,
            height: 0,
            should_quit: false,
        }
    }

    /// Commands to issue once at startup: the initial tab's poll loop
    pub fn start(&mut self) -> Vec<RuntimeCommand> {
        self.ensure_polling()
    }

    pub fn current_tab(&self) -> Tab {
        Tab::ALL[self.tabs.active_index()]
    }

    pub fn active_index(&self) -> usize {
        self.tabs.active_index()
    }

    pub fn content(&self, tab: Tab) -> &str {
        &self.content[tab.index()]
    }

    pub fn active_content(&self) -> &str {
        self.content(self.current_tab())
    }

    /// The table shown beneath the active tab's text, if it has one
    pub fn active_table(&self) -> Option<&TableView> {
        match self.current_tab() {
            Tab::Cpu => Some(&self.cpu_table),
            Tab::Network => Some(&self.net_table),
            Tab::Memory | Tab::Disk | Tab::Host => None,
        }
    }

    fn active_table_mut(&mut self) -> Option<&mut TableView> {
        match self.current_tab() {
            Tab::Cpu => Some(&mut self.cpu_table),
            Tab::Network => Some(&mut self.net_table),
            Tab::Memory | Tab::Disk | Tab::Host => None,
        }
    }

    pub fn is_polling(&self, domain: Domain) -> bool {
        self.polling.contains(&domain)
    }

    /// Apply one message; returns the runtime commands it requires
    pub fn update(&mut self, msg: Message) -> Vec<RuntimeCommand> {
        match msg {
            Message::Key(key) => self.handle_key(key),
            Message::Resize { width, height } => {
                self.width = width;
                self.height = height;
                Vec::new()
            }
            Message::Metric(snapshot) => {
                self.apply_snapshot(snapshot);
                Vec::new()
            }
            Message::InputClosed => {
                self.should_quit = true;
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<RuntimeCommand> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
                self.should_quit = true;
                Vec::new()
            }
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                Vec::new()
            }
            (KeyCode::BackTab, _) => self.switch_tab(TabController::prev),
            (KeyCode::Tab, modifiers) if modifiers.contains(KeyModifiers::SHIFT) => {
                self.switch_tab(TabController::prev)
            }
            (KeyCode::Tab, _) => self.switch_tab(TabController::next),
            (KeyCode::Char(digit @ '1'..='9'), _) => {
                let index = digit as usize - '1' as usize;
                self.switch_tab(|tabs| tabs.select(index))
            }
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.move_table(|t| t.move_up(1)),
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.move_table(|t| t.move_down(1)),
            (KeyCode::PageUp, _) => self.move_table(|t| t.move_up(PAGE_SIZE)),
            (KeyCode::PageDown, _) => self.move_table(|t| t.move_down(PAGE_SIZE)),
            _ => Vec::new(),
        }
    }

    fn switch_tab(&mut self, step: impl FnOnce(&mut TabController)) -> Vec<RuntimeCommand> {
        step(&mut self.tabs);
        self.ensure_polling()
    }

    fn move_table(&mut self, step: impl FnOnce(&mut TableView)) -> Vec<RuntimeCommand> {
        if let Some(table) = self.active_table_mut() {
            step(table);
        }
        Vec::new()
    }

    /// Request the active tab's poll loop the first time the tab is shown
    fn ensure_polling(&mut self) -> Vec<RuntimeCommand> {
        let domain = self.current_tab().domain();
        if !self.polling.insert(domain) {
            return Vec::new();
        }
        debug!(%domain, "requesting poll loop");
        vec![RuntimeCommand::StartPolling { domain }]
    }

    /// Replace the matching domain's slot (and table) wholesale
    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        let slot = Tab::for_domain(snapshot.domain()).index();
        self.content[slot] = match snapshot {
            Snapshot::Cpu(cpu) => {
                self.cpu_table.set_rows(modules::cpu::rows(&cpu));
                modules::cpu::summary(&cpu)
            }
            Snapshot::Memory(mem) => modules::memory::summary(&mem),
            Snapshot::Disk(disk) => modules::disk::summary(&disk),
            Snapshot::Network(net) => {
                self.net_table.set_rows(modules::network::rows(&net));
                modules::network::summary(&net)
            }
            Snapshot::Host(host) => modules::host::summary(&host),
            Snapshot::Failure(failure) => format!("Error: {}", failure.message),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CpuSnapshot, FetchFailure, InterfaceStats, NetworkSnapshot, ThreadStats};

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n).map(|i| vec![format!("row{i}")]).collect()
    }

    fn cpu_snapshot(threads: &[(&str, f64)]) -> Snapshot {
        let mut cpu = CpuSnapshot {
            model_name: "Test CPU".to_string(),
            threads: threads.len(),
            ..CpuSnapshot::default()
        };
        for (label, usage) in threads {
            cpu.per_thread.insert(
                label.to_string(),
                ThreadStats {
                    usage: *usage,
                    ..ThreadStats::default()
                },
            );
        }
        Snapshot::Cpu(cpu)
    }

    fn network_snapshot(names: &[&str]) -> Snapshot {
        Snapshot::Network(NetworkSnapshot {
            interfaces: names
                .iter()
                .map(|name| InterfaceStats {
                    name: name.to_string(),
                    state: "up".to_string(),
                    ..InterfaceStats::default()
                })
                .collect(),
        })
    }

    #[test]
    fn test_table_move_down_clamps() {
        let mut table = TableView::new();
        table.set_rows(rows(5));
        table.move_down(4);
        assert_eq!(table.selected(), Some(4));
        table.move_down(1);
        assert_eq!(table.selected(), Some(4));
        table.move_down(usize::MAX);
        assert_eq!(table.selected(), Some(4));
    }

    #[test]
    fn test_table_move_up_clamps() {
        let mut table = TableView::new();
        table.set_rows(rows(5));
        table.move_up(1);
        assert_eq!(table.selected(), Some(0));
        table.move_down(3);
        table.move_up(10);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_table_keeps_cursor_across_updates() {
        let mut table = TableView::new();
        table.set_rows(rows(5));
        table.move_down(2);
        table.set_rows(rows(6));
        assert_eq!(table.selected(), Some(2));
    }

    #[test]
    fn test_table_shrink_clamps_cursor() {
        let mut table = TableView::new();
        table.set_rows(rows(8));
        table.move_down(7);
        table.set_rows(rows(3));
        assert_eq!(table.selected(), Some(2));
        table.set_rows(Vec::new());
        assert_eq!(table.selected(), None);
        table.move_down(1);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_initial_state() {
        let mut app = App::new(Tab::Cpu);
        assert_eq!(app.current_tab(), Tab::Cpu);
        for tab in Tab::ALL {
            assert_eq!(app.content(tab), tab.placeholder());
        }
        assert!(!app.is_polling(Domain::Cpu));
        assert_eq!(
            app.start(),
            vec![RuntimeCommand::StartPolling {
                domain: Domain::Cpu
            }]
        );
        assert!(app.is_polling(Domain::Cpu));
        assert!(!app.is_polling(Domain::Memory));
    }

    #[test]
    fn test_tab_switch_starts_loops_lazily_once() {
        let mut app = App::new(Tab::Cpu);
        app.start();

        assert_eq!(
            app.update(key(KeyCode::Tab)),
            vec![RuntimeCommand::StartPolling {
                domain: Domain::Memory
            }]
        );
        assert_eq!(app.current_tab(), Tab::Memory);

        // back to CPU and forward again: both loops already exist
        assert!(app.update(key(KeyCode::BackTab)).is_empty());
        assert_eq!(app.current_tab(), Tab::Cpu);
        assert!(app.update(key(KeyCode::Tab)).is_empty());
    }

    #[test]
    fn test_tab_navigation_is_bounded() {
        let mut app = App::new(Tab::Cpu);
        app.update(key(KeyCode::BackTab));
        assert_eq!(app.active_index(), 0);
        for _ in 0..10 {
            app.update(key(KeyCode::Tab));
        }
        assert_eq!(app.current_tab(), Tab::Host);
        app.update(key(KeyCode::Char('2')));
        assert_eq!(app.current_tab(), Tab::Memory);
        app.update(key(KeyCode::Char('9')));
        assert_eq!(app.current_tab(), Tab::Host);
    }

    #[test]
    fn test_snapshot_updates_slot_in_background() {
        let mut app = App::new(Tab::Memory);
        app.update(Message::Metric(cpu_snapshot(&[("cpu0", 1.0)])));
        assert_eq!(app.current_tab(), Tab::Memory);
        assert!(app.content(Tab::Cpu).starts_with("CPU: Test CPU"));
        assert_eq!(app.content(Tab::Memory), modules::memory::PLACEHOLDER);
        assert_eq!(app.cpu_table.len(), 1);
    }

    #[test]
    fn test_later_snapshot_supersedes_earlier() {
        let mut app = App::new(Tab::Cpu);
        app.update(Message::Metric(cpu_snapshot(&[
            ("cpu0", 1.0),
            ("cpu1", 2.0),
            ("cpu2", 3.0),
        ])));
        app.update(Message::Metric(cpu_snapshot(&[("cpu7", 9.0)])));
        let labels: Vec<&str> = app
            .cpu_table
            .rows()
            .iter()
            .map(|row| row[0].as_str())
            .collect();
        assert_eq!(labels, vec!["cpu7"]);
        assert!(app.active_content().contains("Threads: 1"));
    }

    #[test]
    fn test_failure_replaces_slot_only() {
        let mut app = App::new(Tab::Cpu);
        app.update(Message::Metric(cpu_snapshot(&[("cpu0", 1.0), ("cpu1", 2.0)])));
        app.update(key(KeyCode::Down));
        app.update(Message::Metric(Snapshot::Failure(FetchFailure {
            domain: Domain::Cpu,
            message: "no /proc".to_string(),
        })));
        assert_eq!(app.active_content(), "Error: no /proc");
        // last good rows and the cursor stay until the next reading
        assert_eq!(app.cpu_table.len(), 2);
        assert_eq!(app.cpu_table.selected(), Some(1));
        assert_eq!(app.content(Tab::Disk), modules::disk::PLACEHOLDER);
    }

    #[test]
    fn test_navigation_only_moves_active_table() {
        let mut app = App::new(Tab::Cpu);
        app.update(Message::Metric(cpu_snapshot(&[("cpu0", 1.0), ("cpu1", 2.0)])));
        app.update(Message::Metric(network_snapshot(&["eth0", "lo", "wlan0"])));

        app.update(key(KeyCode::Char('j')));
        app.update(key(KeyCode::Down));
        assert_eq!(app.cpu_table.selected(), Some(1));
        assert_eq!(app.net_table.selected(), Some(0));

        app.update(key(KeyCode::Char('4')));
        app.update(key(KeyCode::PageDown));
        assert_eq!(app.net_table.selected(), Some(2));
        app.update(key(KeyCode::Char('k')));
        assert_eq!(app.net_table.selected(), Some(1));
        assert_eq!(app.cpu_table.selected(), Some(1));

        // tables are ignored on tabs without one
        app.update(key(KeyCode::Char('2')));
        app.update(key(KeyCode::Up));
        assert_eq!(app.net_table.selected(), Some(1));
    }

    #[test]
    fn test_shrinking_network_rows_clamps_cursor() {
        let mut app = App::new(Tab::Network);
        app.update(Message::Metric(network_snapshot(&["a", "b", "c", "d"])));
        app.update(key(KeyCode::PageDown));
        assert_eq!(app.net_table.selected(), Some(3));
        app.update(Message::Metric(network_snapshot(&["a", "b"])));
        assert_eq!(app.net_table.selected(), Some(1));
    }

    #[test]
    fn test_quit_keys() {
        for msg in [
            key(KeyCode::Char('q')),
            key(KeyCode::Esc),
            Message::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ] {
            let mut app = App::new(Tab::Cpu);
            app.update(msg);
            assert!(app.should_quit);
        }
        let mut app = App::new(Tab::Cpu);
        app.update(key(KeyCode::Char('c')));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_input_loss_quits() {
        let mut app = App::new(Tab::Cpu);
        assert!(app.update(Message::InputClosed).is_empty());
        assert!(app.should_quit);
    }

    #[test]
    fn test_shift_tab_goes_back() {
        let mut app = App::new(Tab::Disk);
        app.update(Message::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)));
        assert_eq!(app.current_tab(), Tab::Memory);
        app.update(Message::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)));
        app.update(Message::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)));
        assert_eq!(app.current_tab(), Tab::Cpu);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = App::new(Tab::Cpu);
        app.update(Message::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!((app.width, app.height), (120, 40));
    }
}
