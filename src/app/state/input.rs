use super::*;

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

impl AppState {
    pub(crate) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_ctrl_c(key) {
                    tx.send(AppEvent::Quit).await?;
                } else if self.search_open {
                    self.handle_search_key(key, tx, cli).await?;
                } else if self.menu_open {
                    self.handle_menu_key(key);
                } else {
                    self.handle_command_key(key, tx).await?;
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Up(MouseButton::Left) => {
                self.instruments.release();
            }
            Event::Mouse(mouse) if self.view == ViewMode::Hud => {
                let col = i32::from(mouse.column);
                let row = i32::from(mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.instruments.press(col, row);
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        self.instruments.drag_to(col, row);
                        let (width, height) = self.viewport;
                        self.instruments.clamp_to(width, height);
                    }
                    _ => {}
                }
            }
            Event::Resize(width, height) => {
                self.viewport = (width, height);
                self.instruments.clamp_to(width, height);
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_search_key(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.search_open = false;
                self.search_query.clear();
            }
            KeyCode::Enter => self.submit_search(tx, cli).await?,
            KeyCode::Backspace => {
                self.search_query.pop();
            }
            KeyCode::Char(ch) if is_city_char(ch) => self.search_query.push(ch),
            _ => {}
        }
        Ok(())
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.menu_open = false,
            KeyCode::Char(digit) => {
                if let Some(kind) = InstrumentKind::from_digit(digit) {
                    let (width, height) = self.viewport;
                    self.instruments.add(kind, width, height);
                    self.menu_open = false;
                }
            }
            _ => {}
        }
    }

    async fn handle_command_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => tx.send(AppEvent::Quit).await?,
            KeyCode::Char('/' | 'l') => {
                self.search_open = true;
                self.search_query.clear();
            }
            KeyCode::Char('d') | KeyCode::Tab => {
                self.instruments.release();
                self.view = self.view.toggled();
            }
            KeyCode::Char('m') => self.menu_open = true,
            KeyCode::Char('x') => {
                self.instruments.remove_front();
            }
            _ => {}
        }
        Ok(())
    }
}
