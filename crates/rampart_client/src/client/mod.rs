//! # Game Client
//!
//! Single-threaded driver tying server messages, user input and render ticks
//! to the effect scheduler and the inspection panel.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        GAME CLIENT                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  handle_text ──► ServerMessage                              │
//! │     GameState ─────► world view ──► UnitInfoPanel::sync     │
//! │     CombatEvents ──► AnimationScheduler::schedule           │
//! │     UnitInfo ──────► UnitInfoPanel::apply_static_info       │
//! │                                                             │
//! │  select_at / invoke_sell ──► OutboundQueue ──► transport    │
//! │  hire_worker / skip_to_combat ──┘                           │
//! │  render_frame ──► effects + panel ──► UIRenderer            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are handled one at a time, in transport order. Nothing here
//! blocks: the only cross-thread structure is the outbound queue.

use std::collections::HashSet;

use rampart_shared::constants::grid_cell;
use rampart_shared::{
    ClientMessage, CombatEvent, EntityId, GamePhase, GameStateBroadcast, HireWorkerRequest,
    LobbyInfo, PlaceMessage, Player, PlayerId, SellMessage, ServerMessage, Shape, UnitInfoRequest,
    UnitSnapshot,
};
use rampart_ui::{
    AnimationScheduler, Clock, CommandPanelProjection, EffectKind, Layer, PanelProjection, Palette,
    UIBatch, UIRenderer, UnitInfoPanel,
};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::outbound::OutboundQueue;
use crate::picking::pick_unit;

/// Where the client is in the session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Browsing lobbies; game traffic is ignored.
    #[default]
    Lobby,
    /// Joined a game.
    InGame,
}

/// What a board click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardClick {
    /// Off the own board, or not in a game.
    Ignored,
    /// Hit a unit, which is now selected.
    Selected(EntityId),
    /// Hit nothing; a build request was queued.
    Placed(PlaceMessage),
}

/// Game client for Rampart.
pub struct GameClient<C: Clock> {
    /// Client configuration.
    config: ClientConfig,
    /// Current session state.
    session: Session,
    /// Our player identity, once the server has told us.
    viewer: Option<PlayerId>,
    /// Last lobby listing.
    lobbies: Vec<LobbyInfo>,
    /// Last applied broadcast.
    world: GameStateBroadcast,
    /// Tower shape an empty-cell click builds.
    build_shape: Shape,
    /// Selection, static-info cache and panel view-model.
    panel: UnitInfoPanel,
    /// Live combat effects.
    effects: AnimationScheduler<C>,
    /// Draws the panel.
    projection: CommandPanelProjection,
    /// Detail requests sent and not yet answered.
    pending_details: HashSet<EntityId>,
    /// Last error text sent by the server.
    last_error: Option<String>,
    /// Messages for the server.
    outbound: OutboundQueue,
}

impl<C: Clock> GameClient<C> {
    /// Creates a client in the lobby.
    #[must_use]
    pub fn new(config: ClientConfig, clock: C, outbound: OutboundQueue) -> Self {
        let effects = AnimationScheduler::with_style(clock, config.effects, Palette::DEFAULT);
        let projection = CommandPanelProjection::new(config.panel.bounds(), Palette::DEFAULT);
        Self {
            config,
            session: Session::Lobby,
            viewer: None,
            lobbies: Vec::new(),
            world: GameStateBroadcast::default(),
            build_shape: Shape::Square,
            panel: UnitInfoPanel::new(),
            effects,
            projection,
            pending_details: HashSet::new(),
            last_error: None,
            outbound,
        }
    }

    /// Returns the client configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the current session state.
    #[inline]
    #[must_use]
    pub const fn session(&self) -> Session {
        self.session
    }

    /// Returns our player identity.
    #[inline]
    #[must_use]
    pub const fn viewer(&self) -> Option<PlayerId> {
        self.viewer
    }

    /// Returns the last lobby listing.
    #[must_use]
    pub fn lobbies(&self) -> &[LobbyInfo] {
        &self.lobbies
    }

    /// Returns the live units from the last broadcast.
    #[must_use]
    pub fn units(&self) -> &[UnitSnapshot] {
        &self.world.units
    }

    /// Returns the players from the last broadcast.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.world.players
    }

    /// Returns the current game phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.world.phase
    }

    /// Returns the seconds left in the current phase, never negative.
    #[inline]
    #[must_use]
    pub const fn phase_timer(&self) -> f32 {
        self.world.phase_timer
    }

    /// Returns the tower shape the next empty-cell click builds.
    #[inline]
    #[must_use]
    pub const fn build_shape(&self) -> Shape {
        self.build_shape
    }

    /// Chooses the tower shape for following empty-cell clicks.
    pub fn set_build_shape(&mut self, shape: Shape) {
        debug!(?shape, "Build shape selected");
        self.build_shape = shape;
    }

    /// Returns the inspection panel.
    #[inline]
    #[must_use]
    pub const fn panel(&self) -> &UnitInfoPanel {
        &self.panel
    }

    /// Returns the effect scheduler.
    #[inline]
    #[must_use]
    pub const fn effects(&self) -> &AnimationScheduler<C> {
        &self.effects
    }

    /// Returns the last error the server reported.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns true if a detail request for `id` is awaiting its response.
    #[must_use]
    pub fn is_detail_pending(&self, id: EntityId) -> bool {
        self.pending_details.contains(&id)
    }

    /// Joins a lobby and starts accepting game traffic.
    ///
    /// # Errors
    ///
    /// Fails if the join request cannot be queued; the session is unchanged.
    pub fn join_lobby(&mut self, lobby_id: usize) -> ClientResult<()> {
        self.outbound.send(ClientMessage::JoinLobby(lobby_id))?;
        self.session = Session::InGame;
        info!(lobby_id, "Joined lobby");
        Ok(())
    }

    /// Leaves the current game and returns to the lobby.
    ///
    /// Local state is dropped even if the leave request cannot be queued,
    /// including every cached static-info entry: the next game reuses
    /// identities.
    ///
    /// # Errors
    ///
    /// Fails if the leave request cannot be queued.
    pub fn leave_session(&mut self) -> ClientResult<()> {
        self.panel.reset();
        self.effects.clear();
        self.world = GameStateBroadcast::default();
        self.pending_details.clear();
        self.session = Session::Lobby;
        info!("Left session");
        self.outbound.send(ClientMessage::LeaveLobby)
    }

    /// Asks the server to end the build phase early.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be queued.
    pub fn skip_to_combat(&mut self) -> ClientResult<()> {
        if self.session != Session::InGame {
            return Ok(());
        }
        self.outbound.send(ClientMessage::SkipToCombat)
    }

    /// Asks the server for one more worker.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be queued.
    pub fn hire_worker(&mut self) -> ClientResult<()> {
        if self.session != Session::InGame {
            return Ok(());
        }
        self.outbound.send(ClientMessage::HireWorker(HireWorkerRequest {}))
    }

    /// Decodes and handles one inbound text frame.
    ///
    /// # Errors
    ///
    /// [`ClientError::Decode`] if the text is not a server message. State is
    /// left untouched.
    pub fn handle_text(&mut self, text: &str) -> ClientResult<()> {
        let message = ServerMessage::from_json(text).map_err(|err| {
            warn!(error = %err, "Dropped malformed server message");
            ClientError::Decode(err)
        })?;
        self.handle_message(message);
        Ok(())
    }

    /// Handles one decoded server message.
    pub fn handle_message(&mut self, message: ServerMessage) {
        match message {
            ServerMessage::LobbyStatus(lobbies) => {
                debug!(count = lobbies.len(), "Lobby status");
                self.lobbies = lobbies;
            }
            ServerMessage::GameState(state) => {
                if self.session == Session::InGame {
                    self.apply_state(state);
                } else {
                    debug!("Ignored game state outside a game");
                }
            }
            ServerMessage::CombatEvents(events) => {
                if self.session == Session::InGame {
                    for event in &events {
                        self.schedule_effect(event);
                    }
                } else {
                    debug!(count = events.len(), "Ignored combat events outside a game");
                }
            }
            ServerMessage::UnitInfo(info) => {
                if self.session == Session::InGame {
                    self.pending_details.remove(&info.entity_id);
                    self.panel.apply_static_info(info);
                } else {
                    debug!(entity_id = info.entity_id, "Ignored unit info outside a game");
                }
            }
            ServerMessage::PlayerId(id) => {
                info!(player_id = id, "Assigned player id");
                self.viewer = Some(id);
            }
            ServerMessage::Error(text) => {
                warn!(error = %text, "Server reported an error");
                self.last_error = Some(text);
            }
        }
    }

    /// Selects a unit by identity.
    ///
    /// Returns false if the unit is not in the last broadcast.
    ///
    /// # Errors
    ///
    /// Fails if a detail request cannot be queued. The selection still
    /// happens.
    pub fn select_unit(&mut self, id: EntityId) -> ClientResult<bool> {
        let Some(unit) = self.world.units.iter().find(|unit| unit.id == id) else {
            debug!(entity_id = id, "Ignored selection of unknown unit");
            return Ok(false);
        };
        self.panel.select_unit(unit, self.viewer, self.world.phase);
        self.request_detail(id)?;
        Ok(true)
    }

    /// Handles a click on the own board.
    ///
    /// A click on a unit selects it. A click on nothing clears the selection
    /// and asks the server to build [`build_shape`](Self::build_shape) in that
    /// cell; the server decides whether the cell is free and affordable.
    /// Clicks outside a game or past `board_width` do nothing.
    ///
    /// # Errors
    ///
    /// Fails if the detail or build request cannot be queued. The selection
    /// change still happens.
    pub fn select_at(&mut self, x: f32, y: f32) -> ClientResult<BoardClick> {
        let on_board = x >= 0.0 && y >= 0.0 && x <= self.config.board_width;
        if self.session != Session::InGame || !on_board {
            return Ok(BoardClick::Ignored);
        }

        let hitbox = self.config.hitbox_size();
        if let Some(unit) = pick_unit(&self.world.units, x, y, hitbox) {
            let id = unit.id;
            self.panel.select_unit(unit, self.viewer, self.world.phase);
            self.request_detail(id)?;
            return Ok(BoardClick::Selected(id));
        }

        self.panel.clear_selection();
        let size = self.config.grid_square_size;
        let place = PlaceMessage {
            shape: self.build_shape,
            row: grid_cell(y, size),
            col: grid_cell(x, size),
        };
        info!(shape = ?place.shape, row = place.row, col = place.col, "Placing tower");
        self.outbound.send(ClientMessage::Place(place))?;
        Ok(BoardClick::Placed(place))
    }

    /// Closes the inspection panel.
    pub fn clear_selection(&mut self) {
        self.panel.clear_selection();
    }

    /// Sells the selected unit if selling is available.
    ///
    /// Returns true if a sell request was queued. The panel closes either way
    /// once a request was attempted.
    ///
    /// # Errors
    ///
    /// Fails if the sell request cannot be queued.
    pub fn invoke_sell(&mut self) -> ClientResult<bool> {
        let Some(id) = self.panel.sell_target() else {
            return Ok(false);
        };
        let Some(unit) = self.world.units.iter().find(|unit| unit.id == id) else {
            return Ok(false);
        };

        let size = self.config.grid_square_size;
        let sell = SellMessage {
            row: grid_cell(unit.y, size),
            col: grid_cell(unit.x, size),
        };
        info!(entity_id = id, row = sell.row, col = sell.col, "Selling unit");

        self.panel.clear_selection();
        self.outbound.send(ClientMessage::Sell(sell))?;
        Ok(true)
    }

    /// Builds one frame: prunes and draws effects, then the panel on top.
    pub fn render_frame<'r>(&mut self, renderer: &'r mut UIRenderer) -> &'r [UIBatch] {
        renderer.begin_frame();
        renderer.set_layer(Layer::Effects);

        let directives = self.effects.tick();
        let mut commands = Vec::with_capacity(directives.len() * 2);
        for directive in &directives {
            directive.emit(&mut commands);
        }
        renderer.extend(commands);

        self.projection.project(self.panel.view(), renderer);
        renderer.end_frame()
    }

    fn apply_state(&mut self, mut state: GameStateBroadcast) {
        state.phase_timer = state.phase_timer.max(0.0);

        let outcome = self.panel.sync_dynamic_state(&state.units, state.phase);
        if let Some(id) = outcome.despawned {
            debug!(entity_id = id, "Selection closed by despawn");
        }

        let live: HashSet<EntityId> = state.units.iter().map(|unit| unit.id).collect();
        self.pending_details.retain(|id| live.contains(id));

        self.world = state;
    }

    fn schedule_effect(&mut self, event: &CombatEvent) {
        let kind = EffectKind::for_attack(event.attack_type);
        let duration = match kind {
            EffectKind::Projectile => self.config.projectile_ms,
            EffectKind::Melee => self.config.melee_ms,
        };
        self.effects
            .schedule(kind, event.start_pos, event.end_pos, duration, event.attack_type);
    }

    fn request_detail(&mut self, id: EntityId) -> ClientResult<()> {
        if !self.panel.needs_detail(id) || !self.pending_details.insert(id) {
            return Ok(());
        }
        debug!(entity_id = id, "Requesting unit info");
        self.outbound
            .send(ClientMessage::RequestUnitInfo(UnitInfoRequest { entity_id: id }))
            .map_err(|err| {
                self.pending_details.remove(&id);
                err
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::{outbound_channel, OutboundDrain};
    use rampart_shared::{DamageType, Shape, UnitStaticInfo, Vec2};
    use rampart_ui::{Layer, ManualClock, RenderCommand, Selection};

    const ME: PlayerId = 1;

    fn client() -> (ManualClock, GameClient<ManualClock>, OutboundDrain) {
        let clock = ManualClock::new(0);
        let (queue, drain) = outbound_channel(16);
        let client = GameClient::new(ClientConfig::default(), clock.clone(), queue);
        (clock, client, drain)
    }

    fn in_game() -> (ManualClock, GameClient<ManualClock>, OutboundDrain) {
        let (clock, mut client, drain) = client();
        client.handle_message(ServerMessage::PlayerId(ME));
        client.join_lobby(0).unwrap();
        let _ = drain.drain();
        (clock, client, drain)
    }

    fn tower(id: EntityId, x: f32, y: f32) -> UnitSnapshot {
        UnitSnapshot {
            id,
            shape: Shape::Square,
            x,
            y,
            owner_id: ME,
            is_enemy: false,
            current_hp: 100.0,
            max_hp: 100.0,
            is_worker: false,
            current_mana: None,
            max_mana: None,
            worker_state: None,
        }
    }

    fn state(units: Vec<UnitSnapshot>, phase: GamePhase) -> ServerMessage {
        ServerMessage::GameState(GameStateBroadcast {
            units,
            players: Vec::new(),
            phase,
            phase_timer: 10.0,
        })
    }

    fn attack(attack_type: DamageType) -> CombatEvent {
        CombatEvent {
            attacker_id: 1,
            target_id: 2,
            attack_type,
            start_pos: Vec2::new(0.0, 0.0),
            end_pos: Vec2::new(100.0, 0.0),
        }
    }

    #[test]
    fn test_lobby_ignores_game_traffic() {
        let (_clock, mut client, _drain) = client();
        client.handle_message(state(vec![tower(1, 90.0, 90.0)], GamePhase::Build));
        client.handle_message(ServerMessage::CombatEvents(vec![attack(DamageType::PhysicalBasic)]));

        assert!(client.units().is_empty());
        assert!(client.effects().is_empty());
    }

    #[test]
    fn test_join_sends_and_enters_game() {
        let (_clock, mut client, drain) = client();
        client.join_lobby(3).unwrap();

        assert_eq!(client.session(), Session::InGame);
        assert_eq!(drain.drain(), vec![ClientMessage::JoinLobby(3)]);
    }

    #[test]
    fn test_malformed_text_leaves_state() {
        let (_clock, mut client, _drain) = in_game();
        client.handle_message(state(vec![tower(1, 90.0, 90.0)], GamePhase::Build));

        let err = client.handle_text("{\"type\": \"GameState\"").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(client.units().len(), 1);
    }

    #[test]
    fn test_phase_timer_clamped() {
        let (_clock, mut client, _drain) = in_game();
        client.handle_message(ServerMessage::GameState(GameStateBroadcast {
            phase_timer: -2.5,
            ..GameStateBroadcast::default()
        }));
        assert!(client.phase_timer().abs() < f32::EPSILON);
    }

    #[test]
    fn test_combat_events_pick_kind_and_duration() {
        let (_clock, mut client, _drain) = in_game();
        client.handle_message(ServerMessage::CombatEvents(vec![
            attack(DamageType::FireMagical),
            attack(DamageType::PhysicalBasic),
        ]));

        let effects = client.effects().effects();
        assert_eq!(effects[0].kind, EffectKind::Projectile);
        assert_eq!(effects[0].duration_ms, 300);
        assert_eq!(effects[1].kind, EffectKind::Melee);
        assert_eq!(effects[1].duration_ms, 200);
    }

    #[test]
    fn test_select_requests_detail_once() {
        let (_clock, mut client, drain) = in_game();
        client.handle_message(state(vec![tower(7, 90.0, 90.0)], GamePhase::Build));

        assert_eq!(client.select_at(95.0, 85.0).unwrap(), BoardClick::Selected(7));
        assert!(client.select_unit(7).unwrap());

        assert_eq!(
            drain.drain(),
            vec![ClientMessage::RequestUnitInfo(UnitInfoRequest { entity_id: 7 })]
        );
        assert!(client.is_detail_pending(7));

        client.handle_message(ServerMessage::UnitInfo(UnitStaticInfo::empty(7)));
        assert!(!client.is_detail_pending(7));
    }

    #[test]
    fn test_click_on_empty_cell_clears_and_places() {
        let (_clock, mut client, drain) = in_game();
        client.handle_message(state(vec![tower(7, 90.0, 90.0)], GamePhase::Build));
        client.select_unit(7).unwrap();
        let _ = drain.drain();
        client.set_build_shape(Shape::Circle);

        let place = PlaceMessage {
            shape: Shape::Circle,
            row: 6,
            col: 4,
        };
        assert_eq!(client.select_at(250.0, 400.0).unwrap(), BoardClick::Placed(place));
        assert_eq!(client.panel().selection(), Selection::Unselected);
        assert_eq!(drain.drain(), vec![ClientMessage::Place(place)]);
    }

    #[test]
    fn test_click_off_board_is_ignored() {
        let (_clock, mut client, drain) = in_game();
        client.handle_message(state(vec![tower(7, 90.0, 90.0)], GamePhase::Build));
        client.select_unit(7).unwrap();
        let _ = drain.drain();

        assert_eq!(client.select_at(601.0, 90.0).unwrap(), BoardClick::Ignored);
        assert_eq!(client.select_at(-1.0, 90.0).unwrap(), BoardClick::Ignored);
        assert_eq!(client.panel().selection(), Selection::Selected(7));
        assert!(drain.drain().is_empty());
    }

    #[test]
    fn test_click_in_lobby_is_ignored() {
        let (_clock, mut client, drain) = client();
        assert_eq!(client.select_at(90.0, 90.0).unwrap(), BoardClick::Ignored);
        assert!(drain.drain().is_empty());
    }

    #[test]
    fn test_hire_worker_only_in_game() {
        let (_clock, mut lobby, lobby_drain) = client();
        lobby.hire_worker().unwrap();
        assert!(lobby_drain.drain().is_empty());

        let (_clock, mut client, drain) = in_game();
        client.hire_worker().unwrap();
        client.skip_to_combat().unwrap();
        assert_eq!(
            drain.drain(),
            vec![
                ClientMessage::HireWorker(HireWorkerRequest {}),
                ClientMessage::SkipToCombat,
            ]
        );
    }

    #[test]
    fn test_unit_info_in_lobby_is_not_cached() {
        let (_clock, mut client, _drain) = client();
        client.handle_message(ServerMessage::UnitInfo(UnitStaticInfo::empty(7)));
        assert!(client.panel().cache().is_empty());
    }

    #[test]
    fn test_unknown_unit_is_not_selected() {
        let (_clock, mut client, drain) = in_game();
        assert!(!client.select_unit(99).unwrap());
        assert!(drain.drain().is_empty());
    }

    #[test]
    fn test_despawn_forgets_pending_request() {
        let (_clock, mut client, _drain) = in_game();
        client.handle_message(state(vec![tower(7, 90.0, 90.0)], GamePhase::Build));
        client.select_unit(7).unwrap();

        client.handle_message(state(Vec::new(), GamePhase::Build));

        assert!(!client.is_detail_pending(7));
        assert_eq!(client.panel().selection(), Selection::Unselected);
    }

    #[test]
    fn test_sell_sends_grid_cell_and_closes_panel() {
        let (_clock, mut client, drain) = in_game();
        client.handle_message(state(vec![tower(7, 90.0, 150.0)], GamePhase::Build));
        client.select_unit(7).unwrap();
        let _ = drain.drain();

        assert!(client.invoke_sell().unwrap());
        assert_eq!(
            drain.drain(),
            vec![ClientMessage::Sell(SellMessage { row: 2, col: 1 })]
        );
        assert!(!client.panel().view().visible);
    }

    #[test]
    fn test_sell_refused_during_combat() {
        let (_clock, mut client, drain) = in_game();
        client.handle_message(state(vec![tower(7, 90.0, 150.0)], GamePhase::Combat));
        client.select_unit(7).unwrap();
        let _ = drain.drain();

        assert!(!client.invoke_sell().unwrap());
        assert!(drain.drain().is_empty());
        assert!(client.panel().view().visible);
    }

    #[test]
    fn test_server_error_is_kept() {
        let (_clock, mut client, _drain) = client();
        client
            .handle_text(r#"{"type":"Error","data":"Lobby is full"}"#)
            .unwrap();
        assert_eq!(client.last_error(), Some("Lobby is full"));
    }

    #[test]
    fn test_leave_session_resets_world() {
        let (_clock, mut client, drain) = in_game();
        client.handle_message(state(vec![tower(7, 90.0, 90.0)], GamePhase::Build));
        client.handle_message(ServerMessage::CombatEvents(vec![attack(DamageType::FireMagical)]));
        client.select_unit(7).unwrap();
        let _ = drain.drain();

        client.leave_session().unwrap();

        assert_eq!(client.session(), Session::Lobby);
        assert!(client.units().is_empty());
        assert!(client.effects().is_empty());
        assert!(!client.panel().view().visible);
        assert_eq!(drain.drain(), vec![ClientMessage::LeaveLobby]);
    }

    #[test]
    fn test_leave_session_empties_cache() {
        let (_clock, mut client, _drain) = in_game();
        client.handle_message(state(vec![tower(7, 90.0, 90.0)], GamePhase::Build));
        client.handle_message(ServerMessage::UnitInfo(UnitStaticInfo::empty(7)));
        assert!(client.panel().cache().contains(7));

        client.leave_session().unwrap();

        assert!(client.panel().cache().is_empty());
    }

    #[test]
    fn test_render_frame_draws_effects_and_panel() {
        let (clock, mut client, _drain) = in_game();
        client.handle_message(state(vec![tower(7, 90.0, 90.0)], GamePhase::Build));
        client.handle_message(ServerMessage::CombatEvents(vec![attack(DamageType::PhysicalBasic)]));
        client.select_unit(7).unwrap();

        clock.set(100);
        let mut renderer = UIRenderer::new();
        let batches = client.render_frame(&mut renderer);

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].layer, Layer::Effects);
        assert!(matches!(batches[0].commands[..], [RenderCommand::Ring { .. }]));
        assert_eq!(batches[1].layer, Layer::Overlay);
        assert_eq!(batches[1].commands.last(), Some(&RenderCommand::PopClip));

        clock.set(250);
        let batches = client.render_frame(&mut renderer);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].layer, Layer::Overlay);
    }
}
