use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubmitAnswer {
    pub answer_id: u64,
    pub submitter: Address,
    pub uri: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub amount: i128,
    pub answer_id: u64,
}

pub fn emit_submit_answer(env: &Env, answer_id: u64, submitter: Address, uri: String) {
    env.events().publish(
        (symbol_short!("answer"), answer_id),
        SubmitAnswer {
            answer_id,
            submitter,
            uri,
        },
    );
}

pub fn emit_vote(env: &Env, answer_id: u64, amount: i128) {
    env.events()
        .publish((symbol_short!("vote"), answer_id), Vote { amount, answer_id });
}
