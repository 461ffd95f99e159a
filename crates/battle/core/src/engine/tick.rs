//! One combatant's turn: the fixed five-step tick sequence.

use std::sync::Arc;

use crate::buffs::Buff;
use crate::combat::{StrikeOutcome, check_critical, check_dodge, resolve_strike};
use crate::env::{BuffRecipient, RngSource, Targeting};
use crate::event::{CombatEvent, StrikeRecord};
use crate::state::{CombatantId, Element};

use super::errors::TickError;
use super::Simulation;

impl Simulation<'_> {
    /// Execute one tick for `actor`.
    ///
    /// Ticking a dead or unknown combatant is a silent skip. The step order,
    /// and with it the random draw order, is fixed:
    ///
    /// 1. begin turn (clear the used-skill reference)
    /// 2. age buffs
    /// 3. select a skill (one eligibility draw per skill, one index draw)
    /// 4. use the skill (per target in resolved order: critical draw, then
    ///    dodge draw)
    /// 5. expire buffs
    pub fn tick(&mut self, actor: CombatantId) -> Result<(), TickError> {
        let params = self.env.tables().combat();
        let chart = self.env.tables().elements();

        let Some(combatant) = self.combatants.get_mut(&actor) else {
            return Ok(());
        };
        if !combatant.is_alive() {
            return Ok(());
        }

        // 1-2: begin turn, age buffs.
        combatant.begin_turn();
        combatant.age_buffs();

        // 3: weighted skill selection.
        let skill = combatant
            .skills
            .select(&mut self.rng)
            .map_err(|source| TickError::Select { actor, source })?
            .clone();
        combatant.last_used = Some(skill.row_id());

        let atk = combatant.stats.atk();
        let cri = combatant.stats.cri();
        // Neutral skills strike with the user's own affinity.
        let attack_element = match skill.element() {
            Element::Neutral => combatant.row.attack_element,
            elemental => elemental,
        };
        let candidates = combatant.targets.clone();

        // 4: resolve living targets in target-list order.
        let mut resolved = Vec::new();
        for target_id in candidates {
            let alive = self
                .combatants
                .get(&target_id)
                .is_some_and(|t| t.is_alive());
            if !alive {
                continue;
            }
            resolved.push(target_id);
            if skill.targeting() == Targeting::FirstEnemy {
                break;
            }
        }

        let mut strikes = Vec::with_capacity(resolved.len());
        let mut died = Vec::new();
        let mut struck = Vec::new();
        for target_id in resolved {
            // Check draws precede resolution, one pair per target.
            let crit_roll = self.rng.next_range(100);
            let dodge_roll = self.rng.next_range(100);

            let Some(target) = self.combatants.get_mut(&target_id) else {
                continue;
            };

            let is_critical = check_critical(cri, crit_roll);
            let is_dodged = check_dodge(target.stats.dog(), dodge_roll);
            let element_percent = chart.percent(attack_element, target.row.defense_element);

            let result = resolve_strike(
                skill.power(),
                atk,
                target.stats.def(),
                element_percent,
                is_critical,
                is_dodged,
                &params,
            );

            let hp_after = match result.damage {
                Some(damage) => target.stats.take_damage(damage),
                None => target.stats.current_hp(),
            };

            if result.damage.is_some() && hp_after == 0 {
                target.mark_dead();
                died.push(target_id);
            }
            if result.outcome != StrikeOutcome::Dodged {
                struck.push(target_id);
            }

            strikes.push(StrikeRecord {
                target: target_id,
                outcome: result.outcome,
                damage: result.damage,
                hp_after,
            });
        }

        // Buff grants land after damage, dodges excluded, dead excluded.
        if let Some((buff_row, recipient)) = skill.granted_buff() {
            match recipient {
                BuffRecipient::User => {
                    if let Some(user) = self.combatants.get_mut(&actor) {
                        user.add_buff(Buff::from_row(Arc::clone(buff_row)));
                    }
                }
                BuffRecipient::StruckTargets => {
                    for target_id in &struck {
                        if let Some(target) = self.combatants.get_mut(target_id)
                            && target.is_alive()
                        {
                            target.add_buff(Buff::from_row(Arc::clone(buff_row)));
                        }
                    }
                }
            }
        }

        // Log the use first, then each death in strike order.
        if let Some(user) = self.combatants.get(&actor) {
            let actor_snapshot = user.snapshot();
            self.log.push(CombatEvent::SkillUsed {
                actor: actor_snapshot,
                skill: skill.row_id(),
                strikes,
            });
        }
        for target_id in died {
            if let Some(target) = self.combatants.get(&target_id) {
                let snapshot = target.snapshot();
                self.log.push(CombatEvent::Dead {
                    combatant: snapshot,
                });
            }
        }

        // 5: expire buffs on self.
        if let Some(user) = self.combatants.get_mut(&actor)
            && user.expire_buffs()
        {
            let owner = user.snapshot();
            self.log.push(CombatEvent::BuffsRemoved { owner });
        }

        Ok(())
    }
}
