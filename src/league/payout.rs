// src/league/payout.rs
//
// Payout rules: the winner collects every other squad's dues, the
// runner-up pays nothing, last place pays triple. Dollar amounts come
// from configuration only; nothing here is display data.

/// Projected payout per final rank, derived from the configured dues.
#[derive(Debug, Clone, Copy)]
pub struct PayoutTable {
    dues: i64,
}

impl PayoutTable {
    pub fn new(dues: i64) -> Self {
        Self { dues }
    }

    /// What rank `rank` of `squad_count` pays at season end. Negative
    /// means the squad owes money.
    fn payment(&self, rank: usize, squad_count: usize) -> i64 {
        if rank == 1 {
            0
        } else if rank == squad_count && squad_count > 2 {
            -3 * self.dues
        } else if rank == 2 {
            0
        } else {
            -self.dues
        }
    }

    /// Projected payout for a rank: the winner receives the sum of all
    /// other squads' payments, everyone else sees their own payment.
    pub fn projected_payout(&self, rank: usize, squad_count: usize) -> i64 {
        if squad_count == 0 || rank == 0 || rank > squad_count {
            return 0;
        }
        if rank == 1 {
            (2..=squad_count)
                .map(|r| -self.payment(r, squad_count))
                .sum()
        } else {
            self.payment(rank, squad_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_squad_league_matches_rulebook() {
        // Dues $70: ranks 3-5 pay $70, last pays $210, winner collects $420.
        let table = PayoutTable::new(70);
        assert_eq!(table.projected_payout(1, 6), 420);
        assert_eq!(table.projected_payout(2, 6), 0);
        assert_eq!(table.projected_payout(3, 6), -70);
        assert_eq!(table.projected_payout(4, 6), -70);
        assert_eq!(table.projected_payout(5, 6), -70);
        assert_eq!(table.projected_payout(6, 6), -210);
    }

    #[test]
    fn winner_receives_exactly_what_the_rest_pay() {
        for squad_count in 2..=10 {
            let table = PayoutTable::new(70);
            let total: i64 = (1..=squad_count)
                .map(|r| table.projected_payout(r, squad_count))
                .sum();
            assert_eq!(total, 0, "payouts must balance for {} squads", squad_count);
        }
    }

    #[test]
    fn out_of_range_rank_pays_nothing() {
        let table = PayoutTable::new(70);
        assert_eq!(table.projected_payout(7, 6), 0);
        assert_eq!(table.projected_payout(0, 6), 0);
        assert_eq!(table.projected_payout(1, 0), 0);
    }

    #[test]
    fn two_squad_league_has_no_triple_dues() {
        // With two squads the runner-up is also last; the no-dues rule wins.
        let table = PayoutTable::new(70);
        assert_eq!(table.projected_payout(1, 2), 0);
        assert_eq!(table.projected_payout(2, 2), 0);
    }
}
